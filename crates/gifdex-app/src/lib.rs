// Copyright 2026 the gifdex authors
// Licensed under the Apache License, Version 2.0

pub mod model;
pub mod normalize;
pub mod state;

pub use model::*;
pub use normalize::*;
pub use state::*;
