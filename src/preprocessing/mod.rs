//! Dimensionality reduction primitives.

use crate::error::{PerfilarError, Result};
use crate::primitives::Matrix;
use crate::traits::Transformer;

/// Principal component analysis for dimensionality reduction.
///
/// Projects data onto the directions of maximum variance. Used by the
/// corpus-projection extractor to compress term-count matrices into a small
/// fixed number of continuous columns.
///
/// # Examples
///
/// ```
/// use perfilar::preprocessing::Pca;
/// use perfilar::traits::Transformer;
/// use perfilar::primitives::Matrix;
///
/// let data = Matrix::from_vec(4, 3, vec![
///     1.0, 2.0, 3.0,
///     4.0, 5.0, 6.0,
///     7.0, 8.0, 9.0,
///     10.0, 11.0, 12.0,
/// ]).expect("valid matrix dimensions");
///
/// let mut pca = Pca::new(2);
/// let transformed = pca.fit_transform(&data).expect("fit_transform should succeed");
/// assert_eq!(transformed.shape(), (4, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Pca {
    /// Number of components to keep.
    n_components: usize,
    /// Mean of each feature (computed during fit).
    mean: Option<Vec<f32>>,
    /// Principal components (eigenvectors), one per row.
    components: Option<Matrix<f32>>,
    /// Variance explained by each kept component.
    explained_variance: Option<Vec<f32>>,
}

impl Pca {
    /// Creates a new PCA transformer keeping `n_components` components.
    #[must_use]
    pub fn new(n_components: usize) -> Self {
        Self {
            n_components,
            mean: None,
            components: None,
            explained_variance: None,
        }
    }

    /// Number of components this transformer keeps.
    #[must_use]
    pub fn n_components(&self) -> usize {
        self.n_components
    }

    /// Variance explained by each kept component, once fitted.
    #[must_use]
    pub fn explained_variance(&self) -> Option<&[f32]> {
        self.explained_variance.as_deref()
    }

    /// The principal components, once fitted.
    #[must_use]
    pub fn components(&self) -> Option<&Matrix<f32>> {
        self.components.as_ref()
    }
}

impl Transformer for Pca {
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        use nalgebra::{DMatrix, SymmetricEigen};

        let (n_samples, n_features) = x.shape();

        if self.n_components > n_features {
            return Err("n_components cannot exceed number of features".into());
        }
        if n_samples < 2 {
            return Err("PCA needs at least two samples".into());
        }

        // Column means
        let mut mean = vec![0.0; n_features];
        #[allow(clippy::needless_range_loop)]
        for j in 0..n_features {
            let mut sum = 0.0;
            for i in 0..n_samples {
                sum += x.get(i, j);
            }
            mean[j] = sum / n_samples as f32;
        }

        // Center the data
        let mut centered = vec![0.0; n_samples * n_features];
        for i in 0..n_samples {
            for j in 0..n_features {
                centered[i * n_features + j] = x.get(i, j) - mean[j];
            }
        }

        // Covariance matrix: Σ = (X^T X) / (n-1)
        let mut cov = vec![0.0; n_features * n_features];
        for i in 0..n_features {
            for j in 0..n_features {
                let mut sum = 0.0;
                for k in 0..n_samples {
                    sum += centered[k * n_features + i] * centered[k * n_features + j];
                }
                cov[i * n_features + j] = sum / (n_samples - 1) as f32;
            }
        }

        let cov_matrix = DMatrix::from_row_slice(n_features, n_features, &cov);
        let eigen = SymmetricEigen::new(cov_matrix);
        let eigenvalues = eigen.eigenvalues;
        let eigenvectors = eigen.eigenvectors;

        // Sort by eigenvalue (descending)
        let mut indices: Vec<usize> = (0..n_features).collect();
        indices.sort_by(|&a, &b| {
            eigenvalues[b]
                .partial_cmp(&eigenvalues[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut components_data = vec![0.0; self.n_components * n_features];
        let mut explained_variance = vec![0.0; self.n_components];
        for (i, &idx) in indices.iter().take(self.n_components).enumerate() {
            explained_variance[i] = eigenvalues[idx];
            for j in 0..n_features {
                components_data[i * n_features + j] = eigenvectors[(j, idx)];
            }
        }

        self.mean = Some(mean);
        self.components = Some(Matrix::from_vec(
            self.n_components,
            n_features,
            components_data,
        )?);
        self.explained_variance = Some(explained_variance);

        Ok(())
    }

    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        let components = self
            .components
            .as_ref()
            .ok_or_else(|| PerfilarError::not_fitted("pca"))?;
        let mean = self
            .mean
            .as_ref()
            .ok_or_else(|| PerfilarError::not_fitted("pca"))?;

        let (n_samples, n_features) = x.shape();
        if n_features != mean.len() {
            return Err(PerfilarError::DimensionMismatch {
                expected: format!("{} features", mean.len()),
                actual: format!("{n_features} features"),
            });
        }

        // X_pca = (X - mean) @ components^T
        let mut result = vec![0.0; n_samples * self.n_components];
        for i in 0..n_samples {
            for j in 0..self.n_components {
                let mut value = 0.0;
                #[allow(clippy::needless_range_loop)]
                for k in 0..n_features {
                    value += (x.get(i, k) - mean[k]) * components.get(j, k);
                }
                result[i * self.n_components + j] = value;
            }
        }

        Matrix::from_vec(n_samples, self.n_components, result).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pca_output_shape() {
        let data = Matrix::from_vec(
            4,
            3,
            vec![
                1.0, 2.0, 3.0, //
                4.0, 5.0, 6.0, //
                7.0, 8.0, 9.0, //
                10.0, 11.0, 12.0,
            ],
        )
        .expect("valid matrix");

        let mut pca = Pca::new(2);
        let transformed = pca.fit_transform(&data).expect("fit_transform");
        assert_eq!(transformed.shape(), (4, 2));
    }

    #[test]
    fn test_pca_not_fitted() {
        let pca = Pca::new(1);
        let x = Matrix::zeros(2, 2);
        let err = pca.transform(&x).expect_err("should fail before fit");
        assert!(err.to_string().contains("not fitted"));
    }

    #[test]
    fn test_pca_too_many_components() {
        let mut pca = Pca::new(5);
        let x = Matrix::zeros(4, 2);
        assert!(pca.fit(&x).is_err());
    }

    #[test]
    fn test_pca_first_component_captures_line() {
        // Points on a line: all variance along one direction.
        let data = Matrix::from_vec(
            4,
            2,
            vec![
                1.0, 1.0, //
                2.0, 2.0, //
                3.0, 3.0, //
                4.0, 4.0,
            ],
        )
        .expect("valid matrix");

        let mut pca = Pca::new(2);
        pca.fit(&data).expect("fit should succeed");
        let variance = pca.explained_variance().expect("fitted");
        assert!(variance[0] > 0.0);
        assert!(variance[1].abs() < 1e-4);
    }

    #[test]
    fn test_pca_transform_is_deterministic() {
        let data = Matrix::from_vec(3, 2, vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0]).expect("valid");
        let mut pca = Pca::new(1);
        pca.fit(&data).expect("fit should succeed");
        let a = pca.transform(&data).expect("transform");
        let b = pca.transform(&data).expect("transform");
        assert_eq!(a, b);
    }

    #[test]
    fn test_pca_feature_count_mismatch() {
        let data = Matrix::from_vec(3, 2, vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0]).expect("valid");
        let mut pca = Pca::new(1);
        pca.fit(&data).expect("fit should succeed");
        let wrong = Matrix::zeros(3, 5);
        assert!(pca.transform(&wrong).is_err());
    }
}
