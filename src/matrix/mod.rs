//! Модуль для работы с матрицами
//!
//! Предоставляет:
//! - Представление матрицы и конструкторы
//! - Структурные операции (срезы, конкатенация, фильтрация, транспонирование)
//! - Поэлементную алгебру и свёртки
//! - Текстовый вывод

mod types;
mod display;
pub mod algebra;
pub mod operations;

pub use types::Matrix;
pub use algebra::{dot, equals, minus, plus, sum};
pub use operations::{concatenate_cols, concatenate_rows, map};
