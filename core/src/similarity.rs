use crate::error::{Error, Result, ZeroDivisor};

/// Sum of pairwise products. Vectors of different length are rejected rather
/// than truncated.
pub fn dot_product(v1: &[f64], v2: &[f64]) -> Result<f64> {
    if v1.len() != v2.len() {
        return Err(Error::DimensionMismatch { left: v1.len(), right: v2.len() });
    }
    Ok(v1.iter().zip(v2).map(|(a, b)| a * b).sum())
}

fn max_magnitude(v: &[f64]) -> f64 {
    v.iter().fold(0.0, |m: f64, x| m.max(x.abs()))
}

fn scaled(v: &[f64], scale: f64) -> Vec<f64> {
    v.iter().map(|x| x / scale).collect()
}

/// Euclidean norm, computed on the vector scaled by its largest magnitude so
/// the squares neither overflow nor underflow.
pub fn vector_length(v: &[f64]) -> f64 {
    let scale = max_magnitude(v);
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    scale * v.iter().map(|x| (x / scale).powi(2)).sum::<f64>().sqrt()
}

/// `dot(v1, v2) / (|v1| * |v2|)`.
///
/// Each operand is first divided by its largest magnitude, which leaves the
/// cosine unchanged and keeps every intermediate finite. An all-zero operand
/// (or an empty one) is a division by zero; the dimension check happens first.
pub fn cosine_similarity(v1: &[f64], v2: &[f64]) -> Result<f64> {
    let scale1 = max_magnitude(v1);
    let scale2 = max_magnitude(v2);
    let (u1, u2) = (scaled(v1, scale1), scaled(v2, scale2));
    let dot = dot_product(&u1, &u2)?;
    if scale1 == 0.0 || scale2 == 0.0 {
        return Err(Error::DivisionByZero(ZeroDivisor::VectorLength));
    }
    Ok(dot / (vector_length(&u1) * vector_length(&u2)))
}
