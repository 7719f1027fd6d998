//! Network glue for the server-visible preference channel.

pub mod sync;
