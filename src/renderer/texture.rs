//! Procedural textures
//!
//! The four materials are painted CPU-side into RGBA pixel buffers and
//! uploaded once. Painters are pure functions over a byte buffer so they can
//! be tested without a GPU; only `GameTextures::create` touches wgpu.

use rand::Rng;

/// All textures are square at this edge length
pub const TEXTURE_SIZE: u32 = 256;

const SIZE: usize = TEXTURE_SIZE as usize;

fn fill(px: &mut [u8], rgb: [u8; 3]) {
    for p in px.chunks_exact_mut(4) {
        p[0] = rgb[0];
        p[1] = rgb[1];
        p[2] = rgb[2];
        p[3] = 255;
    }
}

fn rect(px: &mut [u8], x: i32, y: i32, w: i32, h: i32, rgb: [u8; 3]) {
    for yy in y.max(0)..(y + h).min(SIZE as i32) {
        for xx in x.max(0)..(x + w).min(SIZE as i32) {
            let at = (yy as usize * SIZE + xx as usize) * 4;
            px[at] = rgb[0];
            px[at + 1] = rgb[1];
            px[at + 2] = rgb[2];
            px[at + 3] = 255;
        }
    }
}

fn stroke_rect(px: &mut [u8], x: i32, y: i32, w: i32, h: i32, thickness: i32, rgb: [u8; 3]) {
    rect(px, x, y, w, thickness, rgb);
    rect(px, x, y + h - thickness, w, thickness, rgb);
    rect(px, x, y, thickness, h, rgb);
    rect(px, x + w - thickness, y, thickness, h, rgb);
}

fn disc(px: &mut [u8], cx: f32, cy: f32, radius: f32, rgb: [u8; 3]) {
    let r2 = radius * radius;
    let min_y = (cy - radius).floor().max(0.0) as usize;
    let max_y = ((cy + radius).ceil() as usize).min(SIZE - 1);
    let min_x = (cx - radius).floor().max(0.0) as usize;
    let max_x = ((cx + radius).ceil() as usize).min(SIZE - 1);
    for yy in min_y..=max_y {
        for xx in min_x..=max_x {
            let (dx, dy) = (xx as f32 - cx, yy as f32 - cy);
            if dx * dx + dy * dy <= r2 {
                let at = (yy * SIZE + xx) * 4;
                px[at] = rgb[0];
                px[at + 1] = rgb[1];
                px[at + 2] = rgb[2];
                px[at + 3] = 255;
            }
        }
    }
}

/// Retrowave grid: near-black base, cyan lines every 32 px, faint cyan wash.
pub fn paint_tunnel() -> Vec<u8> {
    let mut px = vec![0u8; SIZE * SIZE * 4];
    fill(&mut px, [0x11, 0x11, 0x11]);

    let cyan = [0x00, 0xff, 0xff];
    for i in (0..=SIZE as i32).step_by(32) {
        rect(&mut px, i - 2, 0, 4, SIZE as i32, cyan);
        rect(&mut px, 0, i - 2, SIZE as i32, 4, cyan);
    }

    // 10% cyan glow over everything
    for p in px.chunks_exact_mut(4) {
        p[0] = (p[0] as f32 * 0.9) as u8;
        p[1] = (p[1] as f32 * 0.9 + 255.0 * 0.1) as u8;
        p[2] = (p[2] as f32 * 0.9 + 255.0 * 0.1) as u8;
    }
    px
}

/// Rocky noise: mid-grey base under hundreds of lighter and darker blobs.
pub fn paint_asteroid(rng: &mut impl Rng) -> Vec<u8> {
    let mut px = vec![0u8; SIZE * SIZE * 4];
    fill(&mut px, [0x88, 0x77, 0x66]);

    for _ in 0..500 {
        let x = rng.random_range(0.0..SIZE as f32);
        let y = rng.random_range(0.0..SIZE as f32);
        let radius = rng.random_range(5.0..25.0);
        let shade = if rng.random_bool(0.5) {
            [0xaa, 0x99, 0x88]
        } else {
            [0x66, 0x55, 0x44]
        };
        disc(&mut px, x, y, radius, shade);
    }
    px
}

/// Hull plating: blue-grey base, panel outlines, rivet dots.
pub fn paint_ship() -> Vec<u8> {
    let mut px = vec![0u8; SIZE * SIZE * 4];
    fill(&mut px, [0x88, 0x99, 0xaa]);

    let seam = [0x55, 0x66, 0x77];
    stroke_rect(&mut px, 10, 10, 100, 100, 2, seam);
    stroke_rect(&mut px, 120, 10, 100, 100, 2, seam);
    stroke_rect(&mut px, 10, 120, 230, 100, 2, seam);

    let rivet = [0x33, 0x44, 0x55];
    for i in (20..240).step_by(40) {
        rect(&mut px, i, 20, 4, 4, rivet);
        rect(&mut px, i, 230, 4, 4, rivet);
    }
    px
}

/// Plasma bolt: red body with a white energy core down the middle.
pub fn paint_laser() -> Vec<u8> {
    let mut px = vec![0u8; SIZE * SIZE * 4];
    fill(&mut px, [0xff, 0x00, 0x00]);
    rect(&mut px, 100, 0, 56, SIZE as i32, [0xff, 0xff, 0xff]);
    px
}

/// The four material bind groups, keyed by entity type.
pub struct GameTextures {
    pub tunnel: wgpu::BindGroup,
    pub asteroid: wgpu::BindGroup,
    pub ship: wgpu::BindGroup,
    pub laser: wgpu::BindGroup,
}

impl GameTextures {
    pub fn create(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            tunnel: upload(device, queue, layout, &paint_tunnel(), "tunnel"),
            asteroid: upload(device, queue, layout, &paint_asteroid(rng), "asteroid"),
            ship: upload(device, queue, layout, &paint_ship(), "ship"),
            laser: upload(device, queue, layout, &paint_laser(), "laser"),
        }
    }
}

fn upload(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    pixels: &[u8],
    label: &str,
) -> wgpu::BindGroup {
    let size = wgpu::Extent3d {
        width: TEXTURE_SIZE,
        height: TEXTURE_SIZE,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(TEXTURE_SIZE * 4),
            rows_per_image: Some(TEXTURE_SIZE),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    // Repeat wrap: the tunnel tiles its V coordinate by whole rings
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some(label),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::MipmapFilterMode::Linear,
        ..Default::default()
    });

    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn pixel(px: &[u8], x: usize, y: usize) -> [u8; 4] {
        let at = (y * SIZE + x) * 4;
        [px[at], px[at + 1], px[at + 2], px[at + 3]]
    }

    #[test]
    fn test_painters_fill_the_full_buffer() {
        let mut rng = Pcg32::seed_from_u64(1);
        for px in [
            paint_tunnel(),
            paint_asteroid(&mut rng),
            paint_ship(),
            paint_laser(),
        ] {
            assert_eq!(px.len(), SIZE * SIZE * 4);
            assert!(px.chunks_exact(4).all(|p| p[3] == 255));
        }
    }

    #[test]
    fn test_laser_has_white_core_and_red_edge() {
        let px = paint_laser();
        assert_eq!(pixel(&px, 128, 128), [255, 255, 255, 255]);
        assert_eq!(pixel(&px, 10, 128), [255, 0, 0, 255]);
    }

    #[test]
    fn test_tunnel_grid_line_is_cyan() {
        let px = paint_tunnel();
        // On the x = 0 grid line: strong cyan, no red
        let on_line = pixel(&px, 0, 100);
        assert!(on_line[1] > 200 && on_line[2] > 200);
        assert!(on_line[0] < 50);
        // Between lines: dark with only the faint wash
        let off_line = pixel(&px, 16, 16);
        assert!(off_line[1] < 60);
    }

    #[test]
    fn test_asteroid_noise_is_deterministic_per_seed() {
        let mut a = Pcg32::seed_from_u64(9);
        let mut b = Pcg32::seed_from_u64(9);
        assert_eq!(paint_asteroid(&mut a), paint_asteroid(&mut b));
    }

    #[test]
    fn test_ship_rivets_are_dark() {
        let px = paint_ship();
        assert_eq!(pixel(&px, 21, 21), [0x33, 0x44, 0x55, 255]);
        // Base plate away from seams
        assert_eq!(pixel(&px, 60, 60), [0x88, 0x99, 0xaa, 255]);
    }
}
