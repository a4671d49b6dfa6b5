//! Distribution evaluation for distplot.
//!
//! This crate hosts the computation core:
//! - per-kind parameter records and closed-form PMF/PDF formulas
//!   ([`geometric`], [`binomial`], [`poisson`], [`uniform`]),
//! - the tagged [`DistributionSpec`] and its name-based dispatcher,
//! - the [`ValuePolicy`] deciding what happens to negative input values,
//! - the [`Evaluator`] tying both together, with a choice of [`Method`]
//!   (statrs-backed or closed-form).
//!
//! ```
//! use dp_prob::{DistributionSpec, Evaluator, ValuePolicy};
//!
//! let spec = DistributionSpec::binomial(5, 0.5).unwrap();
//! let out = Evaluator::new(ValuePolicy::Filter).evaluate(&spec, &[-1.0, 0.0, 1.0]).unwrap();
//! assert_eq!(out.removed, vec![-1.0]);
//! assert_eq!(out.values(), vec![0.0, 1.0]);
//! ```

pub mod backend;
pub mod binomial;
pub mod evaluate;
pub mod geometric;
pub mod math;
pub mod poisson;
pub mod policy;
pub mod spec;
pub mod uniform;

pub use backend::Method;
pub use evaluate::{Evaluator, evaluate, inclusive_range};
pub use policy::{Partition, ValuePolicy};
pub use spec::{DistributionKind, DistributionSpec, Parameters};
