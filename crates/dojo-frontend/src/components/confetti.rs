use gloo_timers::callback::{Interval, Timeout};
use js_sys::Math;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

/// Fires one burst on the mounted canvas.
pub type FireConfetti = Callback<()>;

const BURST_SIZE: usize = 60;
const FRAME_MS: u32 = 16;
const COLORS: [&str; 8] = [
    "#22c55e", "#16a34a", "#4ade80", "#facc15", "#38bdf8", "#6366f1", "#f472b6", "#fb923c",
];

#[derive(Clone)]
struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    color: &'static str,
    size: f64,
    rotation: f64,
    spin: f64,
}

impl Particle {
    const GRAVITY: f64 = 0.3;

    /// Launched upward from the bottom edge, fanning out from the center.
    fn launch(width: f64, height: f64) -> Self {
        let color = COLORS[(Math::random() * COLORS.len() as f64) as usize % COLORS.len()];

        Self {
            x: width / 2.0 + (Math::random() - 0.5) * width * 0.3,
            y: height + 10.0,
            vx: (Math::random() - 0.5) * 14.0,
            vy: -(Math::random() * 12.0 + 14.0),
            color,
            size: Math::random() * 8.0 + 4.0,
            rotation: Math::random() * 360.0,
            spin: (Math::random() - 0.5) * 10.0,
        }
    }

    fn step(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += Self::GRAVITY;
        self.rotation += self.spin;
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d) {
        ctx.save();
        if ctx.translate(self.x, self.y).is_ok()
            && ctx.rotate(self.rotation.to_radians()).is_ok()
        {
            #[allow(deprecated)]
            ctx.set_fill_style(&wasm_bindgen::JsValue::from_str(self.color));
            ctx.fill_rect(-self.size / 2.0, -self.size / 2.0, self.size, self.size);
        }
        ctx.restore();
    }

    /// Falling back below the bottom edge.
    fn is_done(&self, height: f64) -> bool {
        self.vy > 0.0 && self.y > height + 50.0
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into().ok())
}

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    /// Receives the burst callback once the canvas is mounted.
    pub register: Callback<FireConfetti>,
}

#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let canvas_ref = use_node_ref();
    let particles = use_mut_ref(Vec::<Particle>::new);
    let animation = use_mut_ref(|| None::<Interval>);

    let fire = {
        let particles = particles.clone();
        let canvas_ref = canvas_ref.clone();
        let animation = animation.clone();

        Callback::from(move |_| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let (width, height) = (canvas.width() as f64, canvas.height() as f64);
            particles
                .borrow_mut()
                .extend((0..BURST_SIZE).map(|_| Particle::launch(width, height)));

            if animation.borrow().is_some() {
                return;
            }

            let particles = particles.clone();
            let canvas_ref = canvas_ref.clone();
            let animation_slot = animation.clone();
            let interval = Interval::new(FRAME_MS, move || {
                let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                    return;
                };
                let Some(ctx) = context_2d(&canvas) else {
                    return;
                };
                let (width, height) = (canvas.width() as f64, canvas.height() as f64);
                ctx.clear_rect(0.0, 0.0, width, height);

                let mut particles = particles.borrow_mut();
                particles.retain_mut(|particle| {
                    particle.step();
                    particle.draw(&ctx);
                    !particle.is_done(height)
                });

                if particles.is_empty() {
                    if let Some(finished) = animation_slot.borrow_mut().take() {
                        // Never drop an interval from inside its own callback.
                        Timeout::new(0, move || drop(finished)).forget();
                    }
                }
            });
            *animation.borrow_mut() = Some(interval);
        })
    };

    {
        let register = props.register.clone();
        use_effect_with((), move |_| {
            register.emit(fire);
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width="1920"
            height="1080"
            class="fixed inset-0 w-full h-full pointer-events-none z-50"
        />
    }
}
