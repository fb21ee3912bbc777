pub mod blur_mask_renderer;
mod gaussian;
pub mod renderer_factory;
pub mod solid_fill_mask_renderer;
