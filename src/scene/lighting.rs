//! Scene lighting rig
//!
//! One reddish directional light (daylight through curtains) plus three
//! point lights above the shelf. Pushed once during scene preparation; the
//! uniform names are fixed by the external shader.

use cgmath::Vector3;

use crate::gfx::shader::{uniforms, ShaderInterface};

struct PointLight {
    position: [f32; 3],
    ambient: [f32; 3],
    diffuse: [f32; 3],
    specular: [f32; 3],
}

const POINT_LIGHTS: [PointLight; 3] = [
    PointLight {
        position: [3.0, 2.0, 2.0],
        ambient: [0.1, 0.1, 0.1],
        diffuse: [0.15, 0.15, 0.15],
        specular: [0.35, 0.35, 0.35],
    },
    PointLight {
        position: [-3.0, 2.0, 2.0],
        ambient: [0.1, 0.1, 0.1],
        diffuse: [0.15, 0.15, 0.15],
        specular: [0.35, 0.35, 0.35],
    },
    PointLight {
        position: [0.0, 2.0, 2.0],
        ambient: [0.2, 0.2, 0.2],
        diffuse: [0.5, 0.5, 0.5],
        specular: [0.9, 0.9, 0.9],
    },
];

/// Enable lighting and upload the full light configuration.
pub fn push_lighting(shader: &mut dyn ShaderInterface) {
    shader.set_bool(uniforms::USE_LIGHTING, true);

    shader.set_vec3(
        "directionalLight.direction",
        Vector3::new(-0.05, -0.3, -0.1),
    );
    shader.set_vec3("directionalLight.ambient", Vector3::new(0.07, 0.05, 0.05));
    shader.set_vec3("directionalLight.diffuse", Vector3::new(0.8, 0.6, 0.6));
    shader.set_vec3("directionalLight.specular", Vector3::new(1.0, 0.8, 0.8));
    shader.set_bool("directionalLight.bActive", true);

    for (i, light) in POINT_LIGHTS.iter().enumerate() {
        shader.set_vec3(&format!("pointLights[{i}].position"), light.position.into());
        shader.set_vec3(&format!("pointLights[{i}].ambient"), light.ambient.into());
        shader.set_vec3(&format!("pointLights[{i}].diffuse"), light.diffuse.into());
        shader.set_vec3(&format!("pointLights[{i}].specular"), light.specular.into());
        shader.set_bool(&format!("pointLights[{i}].bActive"), true);
    }
}
