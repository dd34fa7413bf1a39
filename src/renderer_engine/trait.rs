use crate::renderer_engine::types::FrameSnapshot;

/// Collaborateur de rendu : consomme l'état d'un tick, ne le modifie jamais.
pub trait RendererEngine {
    /// Dessine un tick. Retourne le nombre de particules dessinées.
    fn render_frame(&mut self, frame: &FrameSnapshot<'_>) -> usize;

    fn set_canvas_size(&mut self, _width: f32, _height: f32) {}

    fn close(&mut self);
}
