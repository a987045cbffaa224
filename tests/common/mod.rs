#![allow(dead_code)]

mod workspace;

pub use workspace::TestWorkspace;
