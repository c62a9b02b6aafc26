//! Turns loosely-structured fruit inference responses into canonical
//! detections and draws them, scaled, onto an overlay image.

pub mod analysis;
pub mod annotations;
pub mod rendering;
pub mod response;
pub mod taxonomy;
