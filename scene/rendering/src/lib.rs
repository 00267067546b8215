use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use glim_scene_core::*;
// both the scene layer and the gpu layer export a primitive topology, the
// scene one is the vocabulary here
use glim_scene_core::PrimitiveTopology;
use glim_webgpu::*;

/// Forward renderer for flat colored scene models. One pipeline per primitive
/// topology and transparency class, models drawn opaque first then transparent,
/// both partitions in scene insertion order.
pub struct SceneRenderer {
  pipelines: HashMap<PipelineKey, RenderPipeline>,
  bind_group_layout: wgpu::BindGroupLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PipelineKey {
  topology: PrimitiveTopology,
  transparent: bool,
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct ModelUniform {
  mvp: [[f32; 4]; 4],
  color: [f32; 4],
}

pub struct RenderPassTarget<'a> {
  pub color: &'a TextureView,
  pub depth: &'a TextureView,
}

fn map_topology(topology: PrimitiveTopology) -> wgpu::PrimitiveTopology {
  match topology {
    PrimitiveTopology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
    PrimitiveTopology::LineList => wgpu::PrimitiveTopology::LineList,
    PrimitiveTopology::PointList => wgpu::PrimitiveTopology::PointList,
  }
}

/// Opaque models keep their scene order and go first, transparent models keep
/// their scene order and go last, so ordered alpha blending stays stable.
pub fn draw_order(models: &[SceneModel]) -> Vec<usize> {
  let mut order: Vec<usize> = Vec::with_capacity(models.len());
  order.extend(
    models
      .iter()
      .enumerate()
      .filter(|(_, m)| !m.material.is_transparent())
      .map(|(i, _)| i),
  );
  order.extend(
    models
      .iter()
      .enumerate()
      .filter(|(_, m)| m.material.is_transparent())
      .map(|(i, _)| i),
  );
  order
}

impl SceneRenderer {
  pub fn new(gpu: &GPU, target_format: TextureFormat) -> Self {
    let device = &gpu.device;

    let shader = device.create_shader_module(ShaderModuleDescriptor {
      label: Some("flat-shader"),
      source: ShaderSource::Wgsl(include_str!("../shaders/flat.wgsl").into()),
    });

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
      label: Some("model-uniform"),
      entries: &[wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
          ty: wgpu::BufferBindingType::Uniform,
          has_dynamic_offset: false,
          min_binding_size: None,
        },
        count: None,
      }],
    });

    let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
      label: None,
      bind_group_layouts: &[&bind_group_layout],
      push_constant_ranges: &[],
    });

    let mut pipelines = HashMap::new();
    for topology in [
      PrimitiveTopology::TriangleList,
      PrimitiveTopology::LineList,
      PrimitiveTopology::PointList,
    ] {
      for transparent in [false, true] {
        let key = PipelineKey {
          topology,
          transparent,
        };
        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
          label: None,
          layout: Some(&pipeline_layout),
          vertex: VertexState {
            module: &shader,
            entry_point: "vs_main",
            compilation_options: Default::default(),
            buffers: &[VertexBufferLayout {
              array_stride: 12,
              step_mode: wgpu::VertexStepMode::Vertex,
              attributes: &vertex_attr_array![0 => Float32x3],
            }],
          },
          primitive: PrimitiveState {
            topology: map_topology(topology),
            cull_mode: None,
            ..Default::default()
          },
          depth_stencil: Some(DepthStencilState {
            format: OFFSCREEN_DEPTH_FORMAT,
            depth_write_enabled: !transparent,
            depth_compare: CompareFunction::LessEqual,
            stencil: StencilState::default(),
            bias: DepthBiasState::default(),
          }),
          multisample: Default::default(),
          fragment: Some(FragmentState {
            module: &shader,
            entry_point: "fs_main",
            compilation_options: Default::default(),
            targets: &[Some(ColorTargetState {
              format: target_format,
              blend: transparent.then_some(BlendState::ALPHA_BLENDING),
              write_mask: ColorWrites::ALL,
            })],
          }),
          multiview: None,
          cache: None,
        });
        pipelines.insert(key, pipeline);
      }
    }

    Self {
      pipelines,
      bind_group_layout,
    }
  }

  pub fn render(
    &self,
    gpu: &GPU,
    encoder: &mut CommandEncoder,
    scene: &Scene,
    camera: &SceneCamera,
    target: &RenderPassTarget,
  ) {
    let device = &gpu.device;
    let view_projection = camera.view_projection();

    struct Draw {
      key: PipelineKey,
      vertex: Buffer,
      index: Option<Buffer>,
      bind_group: wgpu::BindGroup,
      count: u32,
    }

    // resources must outlive the pass recording, so prepare all draws up front
    let mut draws = Vec::new();
    for index in draw_order(&scene.models) {
      let model = &scene.models[index];
      if !model.node.visible {
        continue;
      }

      let uniform = ModelUniform {
        mvp: (view_projection * model.node.local_matrix).to_cols_array_2d(),
        color: model.material.color().to_array(),
      };
      let uniform_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: None,
        contents: bytemuck::bytes_of(&uniform),
        usage: BufferUsages::UNIFORM,
      });
      let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: None,
        layout: &self.bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
          binding: 0,
          resource: uniform_buffer.as_entire_binding(),
        }],
      });

      let positions: Vec<[f32; 3]> = model.mesh.positions.iter().map(|p| p.to_array()).collect();
      let vertex = device.create_buffer_init(&util::BufferInitDescriptor {
        label: None,
        contents: bytemuck::cast_slice(&positions),
        usage: BufferUsages::VERTEX,
      });
      let index_buffer = model.mesh.indices.as_ref().map(|indices| {
        device.create_buffer_init(&util::BufferInitDescriptor {
          label: None,
          contents: bytemuck::cast_slice(indices),
          usage: BufferUsages::INDEX,
        })
      });

      draws.push(Draw {
        key: PipelineKey {
          topology: model.mesh.topology,
          transparent: model.material.is_transparent(),
        },
        vertex,
        index: index_buffer,
        bind_group,
        count: model.mesh.draw_count() as u32,
      });
    }

    log::trace!("scene-forward: {} draws", draws.len());

    let clear = scene.background.unwrap_or_default().clear_color();

    let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
      label: Some("scene-forward"),
      color_attachments: &[Some(RenderPassColorAttachment {
        view: target.color,
        resolve_target: None,
        ops: Operations {
          load: LoadOp::Clear(Color {
            r: clear.x as f64,
            g: clear.y as f64,
            b: clear.z as f64,
            a: 1.,
          }),
          store: StoreOp::Store,
        },
      })],
      depth_stencil_attachment: Some(RenderPassDepthStencilAttachment {
        view: target.depth,
        depth_ops: Some(Operations {
          load: LoadOp::Clear(1.),
          store: StoreOp::Store,
        }),
        stencil_ops: None,
      }),
      timestamp_writes: None,
      occlusion_query_set: None,
    });

    for draw in &draws {
      pass.set_pipeline(&self.pipelines[&draw.key]);
      pass.set_bind_group(0, &draw.bind_group, &[]);
      pass.set_vertex_buffer(0, draw.vertex.slice(..));
      match &draw.index {
        Some(index) => {
          pass.set_index_buffer(index.slice(..), IndexFormat::Uint32);
          pass.draw_indexed(0..draw.count, 0, 0..1);
        }
        None => pass.draw(0..draw.count, 0..1),
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use glam::{Vec3, Vec4};

  #[test]
  fn model_uniform_layout_matches_shader() {
    assert_eq!(std::mem::size_of::<ModelUniform>(), 80);
    assert_eq!(std::mem::align_of::<ModelUniform>(), 4);
  }

  fn plane(alpha: f32) -> SceneModel {
    SceneModel::new(
      MeshData::plane(1., 1.),
      FlatMaterial::new(Vec4::new(1., 1., 1., alpha)),
      NodeData::at(Vec3::ZERO),
    )
  }

  #[test]
  fn opaque_models_draw_before_transparent() {
    let models = vec![plane(0.4), plane(1.), plane(0.5), plane(1.)];
    assert_eq!(draw_order(&models), vec![1, 3, 0, 2]);
  }
}
