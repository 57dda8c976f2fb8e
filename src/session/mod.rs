//! Session lifecycle: the controller and its collaborator seams.

pub mod collaborators;
pub mod controller;
