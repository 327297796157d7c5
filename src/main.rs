//! Astro Tunnel entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f32::consts::PI;
    use std::rc::Rc;

    use glam::Vec3;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{HtmlCanvasElement, Response};

    use astro_tunnel::consts::*;
    use astro_tunnel::hud::Hud;
    use astro_tunnel::input::{Action, InputState};
    use astro_tunnel::mesh::{self, MeshData};
    use astro_tunnel::renderer::texture::GameTextures;
    use astro_tunnel::renderer::{
        CameraMode, DrawCall, MeshBuffer, RenderState, compose, view_matrix,
    };
    use astro_tunnel::sim::{GamePhase, GameState, tick};
    use astro_tunnel::tuning::Tuning;

    /// One GPU buffer per entity type, shared by all instances
    struct Meshes {
        ship: MeshBuffer,
        tunnel: MeshBuffer,
        asteroid: MeshBuffer,
        laser: MeshBuffer,
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: RenderState,
        meshes: Meshes,
        textures: GameTextures,
        hud: Hud,
        canvas: HtmlCanvasElement,
        camera: CameraMode,
        input: InputState,
        tunnel_offset: f32,
        last_time: f64,
    }

    impl Game {
        /// Match the backing store to the canvas CSS size at the current
        /// device pixel ratio.
        fn resize_if_needed(&mut self) {
            let dpr = web_sys::window()
                .map(|w| w.device_pixel_ratio())
                .unwrap_or(1.0);
            let width = (self.canvas.client_width() as f64 * dpr).round() as u32;
            let height = (self.canvas.client_height() as f64 * dpr).round() as u32;
            if width > 0 && height > 0 && (width, height) != self.render_state.size {
                self.canvas.set_width(width);
                self.canvas.set_height(height);
                self.render_state.resize(width, height);
            }
        }

        fn frame(&mut self, time_ms: f64) {
            let dt = if self.last_time > 0.0 {
                (((time_ms - self.last_time) / 1000.0) as f32).min(0.1)
            } else {
                0.0
            };
            self.last_time = time_ms;
            let now = (time_ms / 1000.0) as f32;

            self.resize_if_needed();

            if self.state.phase == GamePhase::Playing {
                let input = self.input.tick_input();
                tick(&mut self.state, &input, dt);
            }
            self.state.decay_flashes(dt);

            // Tunnel crawls slowly behind the menu, rushes once in flight
            let factor = if self.state.phase == GamePhase::NotStarted {
                TUNNEL_MENU_FACTOR
            } else {
                TUNNEL_FLIGHT_FACTOR
            };
            self.tunnel_offset += TUNNEL_SCROLL_SPEED * dt * factor;
            if self.tunnel_offset > TUNNEL_WRAP {
                self.tunnel_offset = 0.0;
            }

            self.draw(now);

            self.hud.set_stats(
                self.state.score,
                self.state.player.hit_points,
                self.state.level,
            );
            self.hud.show_phase(self.state.phase, self.state.level + 1);
        }

        fn draw(&mut self, now: f32) {
            let view = view_matrix(self.camera, self.state.player.position);
            let mut draws: Vec<DrawCall<'_>> = Vec::with_capacity(
                2 + self.state.obstacles.len() + self.state.shots.len(),
            );

            // Ship: only visible from the chase camera. Rolls with strafing
            // input, spirals on game over, victory-rolls on a win, and idles
            // with a slow spin behind the menu.
            if self.camera == CameraMode::Chase {
                let roll = match self.state.phase {
                    GamePhase::GameOver => now * 5.0,
                    GamePhase::Won => now * 2.0,
                    GamePhase::NotStarted => now * 0.5,
                    _ => self.state.player.tilt,
                };
                let (model_view, normal) = compose(
                    self.state.player.position,
                    Vec3::new(0.0, PI, roll),
                    Vec3::ONE,
                    &view,
                );
                draws.push(DrawCall {
                    mesh: &self.meshes.ship,
                    texture: &self.textures.ship,
                    model_view,
                    normal,
                    flash: if self.state.player.flash_active() { 1.0 } else { 0.0 },
                    lit: true,
                });
            }

            // Tunnel: unlit neon, scrolling toward the camera with a slow spin
            let (model_view, normal) = compose(
                Vec3::new(0.0, 0.0, TUNNEL_BASE_Z + self.tunnel_offset),
                Vec3::new(0.0, 0.0, now * TUNNEL_SPIN),
                Vec3::ONE,
                &view,
            );
            draws.push(DrawCall {
                mesh: &self.meshes.tunnel,
                texture: &self.textures.tunnel,
                model_view,
                normal,
                flash: 0.0,
                lit: false,
            });

            // Obstacles: tumbling spheres, shrunk slightly while flashing.
            // The depth term desynchronizes their tumble from one another.
            for obstacle in &self.state.obstacles {
                let seed = obstacle.position.z;
                let scale = if obstacle.flash_active() { 0.9 } else { 1.0 };
                let (model_view, normal) = compose(
                    obstacle.position,
                    Vec3::new(now + seed, now * 0.7 + seed, now * 0.2),
                    Vec3::splat(scale),
                    &view,
                );
                draws.push(DrawCall {
                    mesh: &self.meshes.asteroid,
                    texture: &self.textures.asteroid,
                    model_view,
                    normal,
                    flash: if obstacle.flash_active() { 1.0 } else { 0.0 },
                    lit: true,
                });
            }

            // Shots: unlit plasma bolts
            for shot in &self.state.shots {
                let (model_view, normal) =
                    compose(shot.position, Vec3::ZERO, Vec3::ONE, &view);
                draws.push(DrawCall {
                    mesh: &self.meshes.laser,
                    texture: &self.textures.laser,
                    model_view,
                    normal,
                    flash: 0.0,
                    lit: false,
                });
            }

            match self.render_state.render(&draws) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (width, height) = self.render_state.size;
                    self.render_state.resize(width, height);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    async fn fetch_text(url: &str) -> Result<String, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let response: Response = JsFuture::from(window.fetch_with_str(url)).await?.dyn_into()?;
        if !response.ok() {
            return Err(JsValue::from_str(&format!(
                "{} -> HTTP {}",
                url,
                response.status()
            )));
        }
        let text = JsFuture::from(response.text()?).await?;
        text.as_string()
            .ok_or_else(|| JsValue::from_str("response body was not text"))
    }

    /// The one startup asset. Any failure here is fatal: drawing a ship from
    /// bogus geometry is worse than refusing to start.
    async fn load_ship_model() -> Result<MeshData, String> {
        let text = fetch_text("assets/ship.obj")
            .await
            .map_err(|e| format!("could not fetch assets/ship.obj: {e:?}"))?;
        mesh::parse_obj(&text).map_err(|e| format!("assets/ship.obj is invalid: {e}"))
    }

    /// Read the optional pacing override the page can embed as
    /// `<script id="tuning" type="application/json">`.
    fn page_tuning() -> Tuning {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("tuning"))
            .and_then(|el| el.text_content())
            .map(|json| Tuning::from_json(&json))
            .unwrap_or_default()
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Astro Tunnel starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let hud = Hud::new().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;

        // Fetch and parse the ship before anything moves; bail loudly if it
        // cannot be loaded.
        let ship_mesh = match load_ship_model().await {
            Ok(mesh) => mesh,
            Err(message) => {
                hud.fatal(&message);
                return;
            }
        };
        log::info!("ship model loaded ({} vertices)", ship_mesh.vertex_count);

        let meshes = Meshes {
            ship: render_state.create_mesh(&ship_mesh, "ship"),
            tunnel: render_state.create_mesh(
                &mesh::tunnel::generate(TUNNEL_RADIUS, TUNNEL_LENGTH, TUNNEL_SEGMENTS, TUNNEL_RINGS),
                "tunnel",
            ),
            asteroid: render_state.create_mesh(
                &mesh::sphere::generate(ASTEROID_RADIUS, ASTEROID_DETAIL),
                "asteroid",
            ),
            laser: render_state.create_mesh(&mesh::laser::generate(), "laser"),
        };

        let seed = js_sys::Date::now() as u64;
        let mut texture_rng = Pcg32::seed_from_u64(seed ^ 0x5eed);
        let textures = GameTextures::create(
            &render_state.device,
            &render_state.queue,
            render_state.texture_layout(),
            &mut texture_rng,
        );

        let state = GameState::new(seed, page_tuning());
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            render_state,
            meshes,
            textures,
            hud,
            canvas,
            camera: CameraMode::default(),
            input: InputState::default(),
            tunnel_offset: 0.0,
            last_time: 0.0,
        }));

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Astro Tunnel running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keydown: held actions latch on; camera toggle and confirm fire on
        // the edge, right here at the boundary
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let Some(action) = Action::from_key(&event.key()) else {
                    return;
                };
                let mut g = game.borrow_mut();
                match action {
                    Action::Confirm => g.state.confirm(),
                    Action::ToggleCamera => g.camera = g.camera.toggled(),
                    held => g.input.set(held, true),
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup: held actions latch off
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(action) = Action::from_key(&event.key()) {
                    game.borrow_mut().input.set(action, false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Astro Tunnel (native) starting...");
    log::info!("Rendering needs a browser - build for wasm32 and serve the web version");

    println!("\nGenerating geometry...");
    smoke_test_geometry();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_test_geometry() {
    use astro_tunnel::consts::*;
    use astro_tunnel::mesh;

    let tunnel =
        mesh::tunnel::generate(TUNNEL_RADIUS, TUNNEL_LENGTH, TUNNEL_SEGMENTS, TUNNEL_RINGS);
    let asteroid = mesh::sphere::generate(ASTEROID_RADIUS, ASTEROID_DETAIL);
    let laser = mesh::laser::generate();
    assert_eq!(tunnel.positions.len() as u32, tunnel.vertex_count * 3);
    assert_eq!(asteroid.positions.len() as u32, asteroid.vertex_count * 3);
    assert_eq!(laser.vertex_count, 36);

    println!(
        "✓ tunnel {} verts, asteroid {} verts, laser {} verts",
        tunnel.vertex_count, asteroid.vertex_count, laser.vertex_count
    );
}
