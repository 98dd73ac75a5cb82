//! Обёртка над общим матричным умножением (GEMM) из ndarray

use ndarray::linalg::general_mat_mul;
use ndarray::{ArrayView2, ArrayViewMut2, ShapeBuilder};

use super::types::{General, GeneralMut, Transpose};
use crate::error::{MatError, Result};

fn check_descriptor(name: &str, rows: usize, cols: usize, stride: usize, len: usize) -> Result<()> {
    if stride < cols {
        return Err(MatError::Backend(format!(
            "matrix {}: stride {} is smaller than cols {}",
            name, stride, cols
        )));
    }
    let needed = if rows == 0 || cols == 0 {
        0
    } else {
        (rows - 1) * stride + cols
    };
    if len < needed {
        return Err(MatError::Backend(format!(
            "matrix {}: buffer of length {} can't hold {}x{} with stride {}",
            name, len, rows, cols, stride
        )));
    }
    Ok(())
}

fn view<'a>(name: &str, m: &General<'a>, trans: Transpose) -> Result<ArrayView2<'a, f64>> {
    let v = ArrayView2::from_shape((m.rows, m.cols).strides((m.stride, 1)), m.data)
        .map_err(|e| MatError::Backend(format!("matrix {}: {}", name, e)))?;
    Ok(if trans.is_transpose() {
        v.reversed_axes()
    } else {
        v
    })
}

/// Вычисляет `C = alpha * op(A) * op(B) + beta * C`
///
/// `op(X)` равно `X` или `X^T` в зависимости от `trans_*`. Результат
/// записывается прямо в буфер `c`.
#[allow(clippy::too_many_arguments)]
pub fn gemm(
    trans_a: Transpose,
    trans_b: Transpose,
    alpha: f64,
    a: General<'_>,
    b: General<'_>,
    beta: f64,
    c: GeneralMut<'_>,
) -> Result<()> {
    check_descriptor("A", a.rows, a.cols, a.stride, a.data.len())?;
    check_descriptor("B", b.rows, b.cols, b.stride, b.data.len())?;
    check_descriptor("C", c.rows, c.cols, c.stride, c.data.len())?;

    let (m, k) = if trans_a.is_transpose() {
        (a.cols, a.rows)
    } else {
        (a.rows, a.cols)
    };
    let (kb, n) = if trans_b.is_transpose() {
        (b.cols, b.rows)
    } else {
        (b.rows, b.cols)
    };
    if k != kb || c.rows != m || c.cols != n {
        return Err(MatError::Backend(format!(
            "incompatible gemm operands: {}x{} * {}x{} -> {}x{}",
            m, k, kb, n, c.rows, c.cols
        )));
    }

    // пустой результат: писать некуда, а ndarray отвергает вид (0, n) над пустым буфером
    if m == 0 || n == 0 {
        return Ok(());
    }
    let mut c_view = ArrayViewMut2::from_shape((c.rows, c.cols).strides((c.stride, 1)), c.data)
        .map_err(|e| MatError::Backend(format!("matrix C: {}", e)))?;
    if k == 0 {
        // пустая сумма: остаётся только beta * C
        c_view.map_inplace(|x| *x = if beta == 0.0 { 0.0 } else { beta * *x });
        return Ok(());
    }

    let a_view = view("A", &a, trans_a)?;
    let b_view = view("B", &b, trans_b)?;
    general_mat_mul(alpha, &a_view, &b_view, beta, &mut c_view);
    Ok(())
}
