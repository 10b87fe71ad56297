//! Vehicle model decoding and the procedural fallback.
//!
//! Decoding works from an in-memory byte slice so the web frontend can feed
//! fetched GLB data straight in; nothing here touches a filesystem.

use crate::bounds::Aabb;
use crate::constants::{
    PLACEHOLDER_BODY_COLOR, PLACEHOLDER_GLASS_COLOR, PLACEHOLDER_WHEEL_COLOR,
};
use crate::error::ModelError;
use crate::material::{classify, MaterialClass};
use glam::{Mat3, Mat4, Vec3};

/// One renderable primitive, already transformed into model space.
#[derive(Clone, Debug)]
pub struct MeshData {
    pub name: String,
    pub class: MaterialClass,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub base_color: [f32; 4],
}

/// A decoded vehicle: meshes plus the box around all of them.
#[derive(Clone, Debug)]
pub struct ViewerModel {
    pub meshes: Vec<MeshData>,
    pub bounds: Aabb,
}

impl ViewerModel {
    /// Model matrix that centers the vehicle on x/z and rests it on y = 0,
    /// so captured poses keep meaning across differently-authored assets.
    pub fn root_transform(&self) -> Mat4 {
        let center = self.bounds.center();
        Mat4::from_translation(Vec3::new(-center.x, -self.bounds.min.y, -center.z))
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn has_glass(&self) -> bool {
        self.meshes.iter().any(|m| m.class == MaterialClass::Glass)
    }
}

/// Decode a GLB/glTF byte slice into render-ready meshes.
pub fn parse_glb(bytes: &[u8]) -> Result<ViewerModel, ModelError> {
    let (document, buffers, _images) = gltf::import_slice(bytes)?;

    let mut meshes = Vec::new();
    for scene in document.scenes() {
        for node in scene.nodes() {
            collect_node(&node, Mat4::IDENTITY, &buffers, &mut meshes)?;
        }
    }

    let bounds = Aabb::from_points(
        meshes
            .iter()
            .flat_map(|m| m.positions.iter().map(|p| Vec3::from(*p))),
    )
    .ok_or(ModelError::Empty)?;

    Ok(ViewerModel { meshes, bounds })
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<MeshData>,
) -> Result<(), ModelError> {
    let transform = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        let mesh_name = mesh.name().unwrap_or("mesh");
        for (prim_index, prim) in mesh.primitives().enumerate() {
            let reader = prim.reader(|b| buffers.get(b.index()).map(|data| data.0.as_slice()));

            let positions: Vec<[f32; 3]> = reader
                .read_positions()
                .ok_or_else(|| ModelError::MissingPositions(mesh_name.to_string()))?
                .collect();
            if positions.is_empty() {
                continue;
            }

            let indices: Vec<u32> = match reader.read_indices() {
                Some(read) => read.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };

            let normals: Vec<[f32; 3]> = match reader.read_normals() {
                Some(read) => read.collect(),
                None => face_normals(&positions, &indices),
            };

            let material = prim.material();
            let pbr = material.pbr_metallic_roughness();
            let base_color = pbr.base_color_factor();
            let class = classify(
                material.name().or(Some(mesh_name)),
                material.alpha_mode() == gltf::material::AlphaMode::Blend,
                base_color[3],
                material.transmission().map(|t| t.transmission_factor()),
            );

            let normal_matrix = Mat3::from_mat4(transform).inverse().transpose();
            out.push(MeshData {
                name: format!("{mesh_name}.{prim_index}"),
                class,
                positions: positions
                    .iter()
                    .map(|p| transform.transform_point3(Vec3::from(*p)).to_array())
                    .collect(),
                normals: normals
                    .iter()
                    .map(|n| (normal_matrix * Vec3::from(*n)).normalize_or_zero().to_array())
                    .collect(),
                indices,
                base_color,
            });
        }
    }

    for child in node.children() {
        collect_node(&child, transform, buffers, out)?;
    }
    Ok(())
}

/// Per-vertex normals accumulated from triangle faces, for primitives that
/// ship positions only.
fn face_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = Vec3::from(positions[a]);
        let pb = Vec3::from(positions[b]);
        let pc = Vec3::from(positions[c]);
        let n = (pb - pa).cross(pc - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.iter()
        .map(|n| {
            if n.length_squared() > 1e-12 {
                n.normalize().to_array()
            } else {
                [0.0, 1.0, 0.0]
            }
        })
        .collect()
}

/// Procedural stand-in silhouette used when the real asset cannot be
/// fetched or decoded: slab body, glazed cabin, four wheels. Dimensions in
/// meters, wheels resting on y = 0.
pub fn placeholder_vehicle() -> ViewerModel {
    let mut meshes = Vec::new();

    let mut body = empty_mesh("body", MaterialClass::Opaque, PLACEHOLDER_BODY_COLOR);
    push_box(
        &mut body,
        Vec3::new(0.0, 0.65, 0.0),
        Vec3::new(2.1, 0.35, 0.85),
    );
    meshes.push(body);

    let mut cabin = empty_mesh("cabin_glass", MaterialClass::Glass, PLACEHOLDER_GLASS_COLOR);
    push_box(
        &mut cabin,
        Vec3::new(-0.15, 1.25, 0.0),
        Vec3::new(0.95, 0.3, 0.78),
    );
    meshes.push(cabin);

    let mut wheels = empty_mesh("wheels", MaterialClass::Opaque, PLACEHOLDER_WHEEL_COLOR);
    for (x, z) in [(-1.35, -0.85), (-1.35, 0.85), (1.35, -0.85), (1.35, 0.85)] {
        push_box(
            &mut wheels,
            Vec3::new(x, 0.32, z),
            Vec3::new(0.32, 0.32, 0.12),
        );
    }
    meshes.push(wheels);

    let bounds = Aabb::from_points(
        meshes
            .iter()
            .flat_map(|m| m.positions.iter().map(|p| Vec3::from(*p))),
    )
    .unwrap_or(Aabb {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    });

    ViewerModel { meshes, bounds }
}

fn empty_mesh(name: &str, class: MaterialClass, base_color: [f32; 4]) -> MeshData {
    MeshData {
        name: name.to_string(),
        class,
        positions: Vec::new(),
        normals: Vec::new(),
        indices: Vec::new(),
        base_color,
    }
}

/// Append an axis-aligned box as 24 vertices / 36 indices with flat normals.
fn push_box(mesh: &mut MeshData, center: Vec3, half: Vec3) {
    // (normal, two in-plane tangents) per face
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]),
        ([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];
    for (normal, u, v) in FACES {
        let n = Vec3::from(normal);
        let u = Vec3::from(u);
        let v = Vec3::from(v);
        // each axis vector picks its half-extent via the abs dot
        let (hn, hu, hv) = (n.abs().dot(half), u.abs().dot(half), v.abs().dot(half));
        let base = mesh.positions.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let corner = center + n * hn + u * (su * hu) + v * (sv * hv);
            mesh.positions.push(corner.to_array());
            mesh.normals.push(normal);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}
