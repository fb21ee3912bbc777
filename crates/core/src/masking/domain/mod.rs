pub mod mask_renderer;
