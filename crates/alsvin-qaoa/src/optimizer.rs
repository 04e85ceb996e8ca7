//! Derivative-free classical optimizer.
//!
//! A simplex-based minimizer in the COBYLA family, suitable for
//! variational loops where gradients are unavailable and every evaluation
//! costs a full circuit execution. The objective is fallible: the first
//! error aborts the run and propagates to the caller. No retries, no
//! partial results.

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Optimal parameter values.
    pub optimal_params: Vec<f64>,
    /// Optimal objective value.
    pub optimal_value: f64,
    /// Number of function evaluations.
    pub num_evaluations: usize,
    /// History of best objective values.
    pub history: Vec<f64>,
    /// Whether the optimization converged within tolerance.
    pub converged: bool,
}

/// Simplex optimizer configuration.
#[derive(Debug, Clone)]
pub struct Cobyla {
    /// Maximum number of iterations.
    pub maxiter: usize,
    /// Convergence tolerance on the simplex value spread.
    pub tol: f64,
    /// Initial trust region radius.
    pub rhobeg: f64,
    /// Final trust region radius.
    pub rhoend: f64,
}

impl Default for Cobyla {
    fn default() -> Self {
        Self {
            maxiter: 100,
            tol: 1e-6,
            rhobeg: 0.5,
            rhoend: 1e-4,
        }
    }
}

impl Cobyla {
    /// Create a new optimizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum iterations.
    #[must_use]
    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    /// Set convergence tolerance.
    #[must_use]
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set trust region parameters.
    #[must_use]
    pub fn with_trust_region(mut self, rhobeg: f64, rhoend: f64) -> Self {
        self.rhobeg = rhobeg;
        self.rhoend = rhoend;
        self
    }

    /// Minimize a fallible objective from the given starting point.
    pub fn minimize<F, E>(
        &self,
        mut objective: F,
        initial_params: Vec<f64>,
    ) -> Result<OptimizationResult, E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
    {
        let n = initial_params.len();
        let mut num_evaluations = 0;
        let mut eval = |params: &[f64], count: &mut usize| -> Result<f64, E> {
            *count += 1;
            objective(params)
        };

        // Initial simplex: the starting point plus one vertex per axis at
        // trust-radius distance.
        let mut simplex = vec![initial_params.clone()];
        let mut values = vec![eval(&initial_params, &mut num_evaluations)?];
        for i in 0..n {
            let mut point = initial_params.clone();
            point[i] += self.rhobeg;
            values.push(eval(&point, &mut num_evaluations)?);
            simplex.push(point);
        }

        let mut history = vec![values[0]];
        let mut rho = self.rhobeg;
        let mut converged = false;

        for _ in 0..self.maxiter {
            // Order vertices by value.
            let mut order: Vec<usize> = (0..=n).collect();
            order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
            let best = order[0];
            let worst = order[n];

            let spread = values[worst] - values[best];
            if spread < self.tol {
                if rho <= self.rhoend {
                    converged = true;
                    break;
                }
                // Shrink the trust region and rebuild around the incumbent.
                rho = (rho * 0.5).max(self.rhoend);
                let anchor = simplex[best].clone();
                let anchor_value = values[best];
                simplex = vec![anchor.clone()];
                values = vec![anchor_value];
                for i in 0..n {
                    let mut point = anchor.clone();
                    point[i] += rho;
                    values.push(eval(&point, &mut num_evaluations)?);
                    simplex.push(point);
                }
                continue;
            }

            // Centroid of everything except the worst vertex.
            let mut centroid = vec![0.0; n];
            for &idx in &order[..n] {
                for (c, x) in centroid.iter_mut().zip(&simplex[idx]) {
                    *c += x;
                }
            }
            for c in &mut centroid {
                *c /= n as f64;
            }

            // Reflect the worst vertex through the centroid, with the step
            // clamped to the trust radius.
            let mut reflected: Vec<f64> = centroid
                .iter()
                .zip(&simplex[worst])
                .map(|(c, w)| 2.0 * c - w)
                .collect();
            for (r, c) in reflected.iter_mut().zip(&centroid) {
                let step = *r - c;
                if step.abs() > rho {
                    *r = c + rho * step.signum();
                }
            }
            let f_reflected = eval(&reflected, &mut num_evaluations)?;

            if f_reflected < values[best] {
                // Try expanding past the reflection.
                let expanded: Vec<f64> = centroid
                    .iter()
                    .zip(&reflected)
                    .map(|(c, r)| c + 2.0 * (r - c))
                    .collect();
                let f_expanded = eval(&expanded, &mut num_evaluations)?;
                if f_expanded < f_reflected {
                    simplex[worst] = expanded;
                    values[worst] = f_expanded;
                } else {
                    simplex[worst] = reflected;
                    values[worst] = f_reflected;
                }
            } else if f_reflected < values[order[n - 1]] {
                simplex[worst] = reflected;
                values[worst] = f_reflected;
            } else {
                // Contract towards the centroid.
                let contracted: Vec<f64> = centroid
                    .iter()
                    .zip(&simplex[worst])
                    .map(|(c, w)| 0.5 * (c + w))
                    .collect();
                let f_contracted = eval(&contracted, &mut num_evaluations)?;
                if f_contracted < values[worst] {
                    simplex[worst] = contracted;
                    values[worst] = f_contracted;
                } else {
                    // Shrink everything towards the best vertex.
                    let anchor = simplex[best].clone();
                    for idx in 0..=n {
                        if idx == best {
                            continue;
                        }
                        for (x, a) in simplex[idx].iter_mut().zip(&anchor) {
                            *x = 0.5 * (*x + a);
                        }
                        values[idx] = eval(&simplex[idx], &mut num_evaluations)?;
                    }
                }
            }

            let incumbent = values.iter().copied().fold(f64::INFINITY, f64::min);
            if incumbent < *history.last().unwrap_or(&f64::INFINITY) {
                history.push(incumbent);
            }
        }

        let min_idx = values
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
            .expect("simplex is never empty");

        Ok(OptimizationResult {
            optimal_params: simplex[min_idx].clone(),
            optimal_value: values[min_idx],
            num_evaluations,
            history,
            converged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn test_quadratic_bowl() {
        let cobyla = Cobyla::new().with_maxiter(200);

        // Minimize (x-1)^2 + (y-2)^2.
        let result = cobyla
            .minimize(
                |params: &[f64]| -> Result<f64, Infallible> {
                    Ok((params[0] - 1.0).powi(2) + (params[1] - 2.0).powi(2))
                },
                vec![0.0, 0.0],
            )
            .unwrap();

        assert!(result.optimal_value < 0.01);
        assert!((result.optimal_params[0] - 1.0).abs() < 0.1);
        assert!((result.optimal_params[1] - 2.0).abs() < 0.1);
    }

    #[test]
    fn test_rosenbrock_improves() {
        let cobyla = Cobyla::new().with_maxiter(500);

        let result = cobyla
            .minimize(
                |params: &[f64]| -> Result<f64, Infallible> {
                    let (x, y) = (params[0], params[1]);
                    Ok((1.0 - x).powi(2) + 100.0 * (y - x.powi(2)).powi(2))
                },
                vec![0.0, 0.0],
            )
            .unwrap();

        // Rosenbrock is hard; just require real progress from f(0,0) = 1.
        assert!(result.optimal_value < 1.0);
        assert!(result.num_evaluations > 2);
    }

    #[test]
    fn test_history_is_monotone() {
        let cobyla = Cobyla::new().with_maxiter(100);
        let result = cobyla
            .minimize(
                |params: &[f64]| -> Result<f64, Infallible> { Ok(params[0].powi(2)) },
                vec![3.0],
            )
            .unwrap();
        assert!(result.history.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_objective_error_aborts() {
        let cobyla = Cobyla::new().with_maxiter(50);
        let mut calls = 0;
        let result = cobyla.minimize(
            |_: &[f64]| -> Result<f64, String> {
                calls += 1;
                if calls >= 3 {
                    Err("backend gone".to_string())
                } else {
                    Ok(1.0)
                }
            },
            vec![0.0, 0.0],
        );
        assert_eq!(result.unwrap_err(), "backend gone");
    }
}
