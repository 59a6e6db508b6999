//! Window management and the fixed-rate render loop.
//!
//! Implements [`winit::application::ApplicationHandler`] to drive the event
//! loop: window creation, close handling, and one simulation tick plus one
//! draw per 1/60 s frame. The loop has two states, running and stopped;
//! the window-close event moves it to stopped, which drops the display
//! resources and returns from [`App::run`].

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, FRAME_INTERVAL, WINDOW_TITLE};
use crate::renderer::{RenderState, shapes};
use crate::sim::{World, tick};

/// The application state that winit drives.
pub struct App {
    world: World,
    render_state: Option<RenderState>,
    window: Option<Arc<Window>>,
    next_frame: Instant,
}

impl App {
    pub fn new(world: World) -> Self {
        Self {
            world,
            render_state: None,
            window: None,
            next_frame: Instant::now(),
        }
    }

    /// Run the event loop until the window is closed.
    pub fn run(mut self) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
        event_loop.run_app(&mut self).expect("Event loop error");
    }

    /// Advance the simulation one frame and draw it.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        tick(&mut self.world);

        let Some(render_state) = &mut self.render_state else {
            return;
        };
        let vertices = shapes::world_vertices(&self.world);
        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = render_state.size;
                render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Surface error: {:?}", e),
        }
    }

    /// Schedule the next frame a fixed interval after the previous one.
    fn schedule_next_frame(&mut self, event_loop: &ActiveEventLoop) {
        self.next_frame += FRAME_INTERVAL;
        let now = Instant::now();
        if self.next_frame < now {
            // Fell behind; skip ahead rather than bursting frames
            self.next_frame = now + FRAME_INTERVAL;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64))
                .with_resizable(false);
            let window = Arc::new(
                event_loop
                    .create_window(attrs)
                    .expect("Failed to create window"),
            );

            self.render_state = Some(RenderState::new(window.clone()));
            self.window = Some(window);
            self.next_frame = Instant::now();
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                self.schedule_next_frame(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // The WaitUntil deadline has fired once we reach it; draw the next
        // frame. Redraws before the deadline come from the request in
        // resumed() or from the window system.
        if Instant::now() >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
