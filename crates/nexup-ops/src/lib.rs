//! Operations for the nexup publisher: project-structure detection and the
//! publish run itself.

pub mod ops_publish;
pub mod project;
