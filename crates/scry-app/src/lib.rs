// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod filters;
pub mod hover;
pub mod markup;
pub mod model;
pub mod session;

pub use filters::*;
pub use hover::*;
pub use model::*;
pub use session::*;
