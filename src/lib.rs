//! Polyres is an exact polynomial arithmetic library built around two pieces:
//! monomials that are interned in a shared pool, so that equal monomials share
//! one allocation and compare by pointer, and a subresultant engine that computes
//! resultants, discriminants and principal subresultant coefficients over any
//! integral domain.
//!
//! For example:
//!
//! ```
//! use polyres::{
//!     domains::integer::Z,
//!     poly::{polynomial::PolynomialRing, resultant::SubresultantStrategy},
//!     state::State,
//! };
//!
//! let ring: PolynomialRing<_> = PolynomialRing::new(Z);
//! let (x_var, y_var) = (State::get_variable("x"), State::get_variable("y"));
//! let (x, y) = (ring.variable(x_var), ring.variable(y_var));
//!
//! // eliminate x from x^2 + y^2 - 1 = 0 and x - y = 0
//! let f = &(&x.pow(2) + &y.pow(2)) - &x.one();
//! let g = &x - &y;
//! let r = f
//!     .to_univariate(x_var)
//!     .resultant(&g.to_univariate(x_var), SubresultantStrategy::Lazard);
//!
//! assert_eq!(r, &y.pow(2).mul_coeff(2.into()) - &x.one());
//! println!("res = {}", r);
//! ```
//!
//! Computations log through [tracing](https://docs.rs/tracing) at the `debug` and
//! `trace` levels.

pub mod domains;
pub mod poly;
pub mod printer;
pub mod state;
pub mod utils;
