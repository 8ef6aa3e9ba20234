//! Forces dynamic linking of `dogmaze_internal` when the `dynamic_linking` feature is enabled.

#![allow(unused_imports)]
use dogmaze_internal;
