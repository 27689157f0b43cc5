// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Simulation of a threshold aggregation protocol.
//!
//! Every party Shamir-shares its secret among all parties. Each party then
//! computes a public weighted sum of the shares it holds; these local results
//! are evaluations of one polynomial whose constant term is the weighted sum
//! of the secrets. Cheating parties perturb their result, and decoding the
//! vector of local results both recovers the aggregate and names them.

mod config;
mod report;
mod shares;
mod simulation;

pub use config::*;
pub use report::*;
pub use shares::*;
pub use simulation::*;
