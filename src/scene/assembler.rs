//! Scene assembler
//!
//! The single entry point the render loop consumes: [`SceneAssembler::prepare`]
//! once at startup, [`SceneAssembler::render`] every frame. The arrangement
//! itself — which bottle goes where, at what size, holding which sauce — is
//! a set of literal constants.

use cgmath::Vector3;
use log::error;

use crate::assets::ImageLoader;
use crate::gfx::device::TextureDevice;
use crate::gfx::mesh::{MeshProvider, PrimitiveKind};
use crate::gfx::resources::{MaterialEntry, SceneResources};
use crate::gfx::shader::ShaderInterface;
use crate::gfx::shading::ShaderBindings;
use crate::gfx::transform::Placement;

use super::bottles::{classic_bottle, nozzle_bottle, ring_neck_bottle};
use super::instructions::{submit, DrawInstruction, Finish};
use super::lighting;
use super::shelf::shelf;

/// Fixed texture set, in bind-slot order.
const SCENE_TEXTURES: [(&str, &str); 9] = [
    ("textures/wood.jpg", "wood"),
    ("textures/sauce1.jpg", "sauce1"),
    ("textures/sauce2.jpg", "sauce2"),
    ("textures/sauce3.jpg", "sauce3"),
    ("textures/sauce4.jpg", "sauce4"),
    ("textures/lid.jpg", "lid"),
    ("textures/wall.jpg", "wall"),
    ("textures/shelfwood.jpg", "shelf"),
    ("textures/redplastic.jpg", "redplastic"),
];

/// Prepares and renders the bottle-shelf still life.
#[derive(Default)]
pub struct SceneAssembler {
    resources: SceneResources,
}

impl SceneAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registries backing this scene, for external bind-group assembly.
    pub fn resources(&self) -> &SceneResources {
        &self.resources
    }

    /// One-time scene preparation: textures, materials, lighting, meshes.
    ///
    /// A texture that fails to load is reported and skipped; its tag stays
    /// unresolvable and rendering continues without it.
    pub fn prepare(
        &mut self,
        loader: &dyn ImageLoader,
        device: &mut dyn TextureDevice,
        shader: &mut dyn ShaderInterface,
        meshes: &mut dyn MeshProvider,
    ) {
        for (path, tag) in SCENE_TEXTURES {
            if let Err(err) = self.resources.textures.register(loader, device, path, tag) {
                error!("skipping texture {tag:?}: {err}");
            }
        }
        self.resources.textures.bind_all(device);

        self.define_materials();
        lighting::push_lighting(shader);

        // One mesh per primitive kind, no matter how often it is drawn
        for kind in PrimitiveKind::ALL {
            meshes.load(kind);
        }
    }

    fn define_materials(&mut self) {
        let materials = &mut self.resources.materials;
        materials.register(MaterialEntry::new(
            "glass",
            Vector3::new(0.2, 0.2, 0.2),
            Vector3::new(1.0, 1.0, 1.0),
            95.0,
        ));
        materials.register(MaterialEntry::new(
            "plastic",
            Vector3::new(0.1, 0.1, 0.1),
            Vector3::new(0.1, 0.1, 0.1),
            0.01,
        ));
        materials.register(MaterialEntry::new(
            "wood",
            Vector3::new(0.3, 0.3, 0.3),
            Vector3::new(0.7, 0.7, 0.7),
            80.0,
        ));
        materials.register(MaterialEntry::new(
            "wall",
            Vector3::new(0.3, 0.3, 0.3),
            Vector3::new(0.6, 0.6, 0.6),
            75.0,
        ));
        materials.register(MaterialEntry::new(
            "shelf",
            Vector3::new(0.6, 0.6, 0.6),
            Vector3::new(0.2, 0.2, 0.2),
            0.2,
        ));
    }

    /// Assemble and draw one frame of the still life.
    pub fn render(&self, shader: &mut dyn ShaderInterface, meshes: &mut dyn MeshProvider) {
        let frame = self.compose_frame();
        let mut bindings = ShaderBindings::new(shader, &self.resources);
        submit(&frame, &mut bindings, meshes);
    }

    /// The full frame as a data-only instruction list.
    pub fn compose_frame(&self) -> Vec<DrawInstruction> {
        let mut frame = Vec::new();

        // Wooden table surface
        frame.push(DrawInstruction {
            placement: Placement::upright(
                Vector3::new(20.0, 1.0, 10.0),
                Vector3::new(0.0, 0.0, 0.0),
            ),
            finish: Finish::Textured {
                tag: "wood".to_string(),
                uv_scale: (1.0, 1.0),
            },
            material: Some("wood".to_string()),
            primitive: PrimitiveKind::Plane,
        });

        // Kitchen wall behind the shelf, a plane stood up on its edge
        frame.push(DrawInstruction {
            placement: Placement::new(
                Vector3::new(20.0, 1.0, 10.0),
                Vector3::new(90.0, 0.0, 0.0),
                Vector3::new(0.0, 10.0, -5.0),
            ),
            finish: Finish::Textured {
                tag: "wall".to_string(),
                uv_scale: (1.0, 1.0),
            },
            material: Some("wall".to_string()),
            primitive: PrimitiveKind::Plane,
        });

        frame.extend(shelf());

        // Top shelf, left to right
        frame.extend(classic_bottle(-4.0, 10.0, -1.0, 0.3, "sauce4"));
        frame.extend(classic_bottle(-2.8, 5.0, -1.0, 0.6, "sauce1"));
        frame.extend(classic_bottle(-1.5, 5.0, -1.0, 0.6, "sauce4"));
        frame.extend(classic_bottle(3.0, 5.0, -1.0, 0.6, "sauce4"));

        // Middle shelf, left to right
        frame.extend(classic_bottle(-4.0, 6.7, 1.0, 0.3, "sauce4"));
        frame.extend(classic_bottle(-3.0, 6.7, 1.0, 0.3, "sauce2"));
        frame.extend(ring_neck_bottle(2.0, 4.9, 1.0, 0.4, "sauce4"));
        frame.extend(nozzle_bottle(3.2, 4.9, 1.0, 0.4, "sauce2"));
        frame.extend(classic_bottle(4.1, 3.35, 1.0, 0.6, "sauce1"));

        // Bottom shelf, left to right
        frame.extend(classic_bottle(-4.0, 3.4, 3.0, 0.3, "sauce1"));
        frame.extend(classic_bottle(-3.0, 3.4, 3.0, 0.3, "sauce2"));
        frame.extend(classic_bottle(-2.0, 3.4, 3.0, 0.3, "sauce3"));
        frame.extend(classic_bottle(-1.0, 3.4, 3.0, 0.3, "sauce1"));
        frame.extend(classic_bottle(2.5, 3.4, 3.0, 0.3, "sauce4"));
        frame.extend(classic_bottle(3.5, 3.4, 3.0, 0.3, "sauce2"));
        frame.extend(classic_bottle(4.5, 3.4, 3.0, 0.3, "sauce1"));

        // Large bottle standing on the table to the right
        frame.extend(classic_bottle(6.3, 0.0, 3.9, 0.8, "sauce1"));

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetError, ImageData};
    use crate::gfx::headless::{HeadlessDevice, RecordingMeshes, RecordingShader, UniformValue};
    use crate::gfx::shader::uniforms;

    struct StubLoader;

    impl ImageLoader for StubLoader {
        fn load(&self, _path: &str) -> Result<ImageData, AssetError> {
            Ok(ImageData {
                pixels: vec![0x80; 4],
                width: 1,
                height: 1,
                channels: 4,
            })
        }
    }

    /// Loader that fails for one path, to exercise slot shifting.
    struct FlakyLoader;

    impl ImageLoader for FlakyLoader {
        fn load(&self, path: &str) -> Result<ImageData, AssetError> {
            if path.contains("sauce2") {
                return Err(AssetError::UnsupportedChannels {
                    path: path.to_string(),
                    channels: 2,
                });
            }
            StubLoader.load(path)
        }
    }

    fn prepared() -> (SceneAssembler, RecordingShader, RecordingMeshes) {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut assembler = SceneAssembler::new();
        let mut device = HeadlessDevice::default();
        let mut shader = RecordingShader::default();
        let mut meshes = RecordingMeshes::default();
        assembler.prepare(&StubLoader, &mut device, &mut shader, &mut meshes);
        (assembler, shader, meshes)
    }

    #[test]
    fn preparation_registers_the_fixed_resource_set() {
        let (assembler, shader, meshes) = prepared();

        assert_eq!(assembler.resources().textures.len(), 9);
        assert_eq!(assembler.resources().materials.len(), 5);
        // "lid" is the sixth registration
        assert_eq!(assembler.resources().textures.slot("lid"), Some(5));
        assert_eq!(
            shader.last(uniforms::USE_LIGHTING),
            Some(&UniformValue::Bool(true))
        );
        assert_eq!(meshes.loaded, PrimitiveKind::ALL.to_vec());
    }

    #[test]
    fn failed_texture_load_shifts_later_slots() {
        let mut assembler = SceneAssembler::new();
        let mut device = HeadlessDevice::default();
        let mut shader = RecordingShader::default();
        let mut meshes = RecordingMeshes::default();
        assembler.prepare(&FlakyLoader, &mut device, &mut shader, &mut meshes);

        assert_eq!(assembler.resources().textures.len(), 8);
        assert_eq!(assembler.resources().textures.slot("sauce2"), None);
        // Everything after the failure moves down one slot
        assert_eq!(assembler.resources().textures.slot("sauce3"), Some(2));
        assert_eq!(assembler.resources().textures.slot("lid"), Some(4));
    }

    #[test]
    fn frame_opens_with_table_wall_and_shelf() {
        let (assembler, _, _) = prepared();
        let frame = assembler.compose_frame();

        assert_eq!(frame[0].primitive, PrimitiveKind::Plane);
        assert_eq!(frame[1].primitive, PrimitiveKind::Plane);
        assert_eq!(frame[1].placement.rotation_deg.x, 90.0);
        for instruction in &frame[2..11] {
            assert_eq!(instruction.primitive, PrimitiveKind::Box);
        }
    }

    #[test]
    fn frame_draw_counts_match_the_arrangement() {
        let (assembler, _, _) = prepared();
        let frame = assembler.compose_frame();

        let count = |kind: PrimitiveKind| frame.iter().filter(|i| i.primitive == kind).count();

        // 16 classic-profile bottles (one inside the ring-neck variant)
        // at 4 cylinders each, plus 2 in the nozzle bottle
        assert_eq!(count(PrimitiveKind::Plane), 2);
        assert_eq!(count(PrimitiveKind::Box), 9);
        assert_eq!(count(PrimitiveKind::Cylinder), 66);
        assert_eq!(count(PrimitiveKind::TaperedCylinder), 19);
        assert_eq!(count(PrimitiveKind::Torus), 1);
        assert_eq!(frame.len(), 97);
    }

    #[test]
    fn render_issues_one_draw_per_instruction() {
        let (assembler, mut shader, _) = prepared();
        let mut meshes = RecordingMeshes::default();

        assembler.render(&mut shader, &mut meshes);

        assert_eq!(meshes.drawn.len(), 97);
        assert_eq!(meshes.drawn[0], PrimitiveKind::Plane);
        assert_eq!(*meshes.drawn.last().unwrap(), PrimitiveKind::Cylinder);
    }

    #[test]
    fn rendering_is_repeatable() {
        let (assembler, mut shader, _) = prepared();
        let mut first = RecordingMeshes::default();
        let mut second = RecordingMeshes::default();

        assembler.render(&mut shader, &mut first);
        assembler.render(&mut shader, &mut second);

        assert_eq!(first.drawn, second.drawn);
    }
}
