use super::resources::MAX_QUADS;
use super::Renderer;
use crate::layout::Quad;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, quads: &[Quad]) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Reconfigure and try again next frame
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(SurfaceError::Timeout) => return Ok(()),
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());

    let count = quads.len().min(MAX_QUADS);
    renderer.queue.write_buffer(
        &renderer.buffers.instances,
        0,
        bytemuck::cast_slice(&quads[..count]),
    );

    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.quad_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
        pass.set_vertex_buffer(0, renderer.mesh.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
        pass.set_index_buffer(renderer.mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.draw_indexed(0..renderer.mesh.index_count, 0, 0..count as u32);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}
