// Custom cursor overlay: a sprung ring with a center dot, a trailing glow,
// hover brackets, click ripples and the particle trail. Pointer handlers only
// mutate state; the per-frame `render` writes every visible style.

use fnv::FnvHashMap;
use glam::Vec2;
use site_core::{
    cursor_visuals, CursorState, Particle, ParticleTrail, Spring2, CURSOR_PARKED,
    CURSOR_SPRING_DAMPING, CURSOR_SPRING_MASS, CURSOR_SPRING_STIFFNESS, PARTICLE_EVICT_DELAY_MS,
    RIPPLE_DURATION_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::fmt;

pub type CursorHandle = Rc<RefCell<CursorFx>>;

pub struct CursorFx {
    state: CursorState,
    spring: Spring2,
    target: Vec2,
    trail: ParticleTrail,
    trail_nodes: FnvHashMap<u64, web::HtmlElement>,
    evict_armed: bool,
    evict_tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    document: web::Document,
    layer: web::HtmlElement,
    ring: web::HtmlElement,
    ring_scale: web::HtmlElement,
    ring_spin: web::HtmlElement,
    dot: web::HtmlElement,
    glow: web::HtmlElement,
    glow_scale: web::HtmlElement,
    glow_blob: web::HtmlElement,
    bracket_l: web::HtmlElement,
    bracket_r: web::HtmlElement,
}

impl CursorFx {
    /// Build the overlay layers, append them to `<body>` and prepare the
    /// shared eviction callback for the particle trail.
    pub fn mount(document: &web::Document, seed: u64) -> anyhow::Result<CursorHandle> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body to mount the cursor on"))?;

        let layer = dom::create_div(document, "cursor-fx")?;

        // glow: sprung translate on the root, scale transition on the child
        let glow = dom::create_div(document, "cursor-glow")?;
        let glow_scale = dom::create_div(document, "cursor-glow-scale")?;
        let glow_blob = dom::create_div(document, "cursor-glow-blob")?;
        _ = glow_scale.append_child(&glow_blob);
        _ = glow.append_child(&glow_scale);

        // ring: spinning conic border with a masked center holding the dot
        let ring = dom::create_div(document, "cursor-ring")?;
        let ring_scale = dom::create_div(document, "cursor-ring-scale")?;
        let ring_spin = dom::create_div(document, "cursor-ring-spin")?;
        let ring_mask = dom::create_div(document, "cursor-ring-mask")?;
        let dot_wrap = dom::create_div(document, "cursor-dot-wrap")?;
        let dot = dom::create_div(document, "cursor-dot")?;
        let dot_core = dom::create_div(document, "cursor-dot-core")?;
        let dot_halo = dom::create_div(document, "cursor-dot-halo")?;
        _ = dot.append_child(&dot_core);
        _ = dot.append_child(&dot_halo);
        _ = dot_wrap.append_child(&dot);
        _ = ring_scale.append_child(&ring_spin);
        _ = ring_scale.append_child(&ring_mask);
        _ = ring_scale.append_child(&dot_wrap);
        _ = ring.append_child(&ring_scale);

        let bracket_l = dom::create_el(document, "span", "cursor-bracket cursor-bracket-l")?;
        bracket_l.set_text_content(Some("<"));
        let bracket_r = dom::create_el(document, "span", "cursor-bracket cursor-bracket-r")?;
        bracket_r.set_text_content(Some(">"));

        _ = layer.append_child(&glow);
        _ = layer.append_child(&ring);
        _ = layer.append_child(&bracket_l);
        _ = layer.append_child(&bracket_r);
        _ = body.append_child(&layer);

        let parked = Vec2::from(CURSOR_PARKED);
        let fx = Rc::new(RefCell::new(CursorFx {
            state: CursorState::new(),
            spring: Spring2::new(
                parked,
                CURSOR_SPRING_STIFFNESS,
                CURSOR_SPRING_DAMPING,
                CURSOR_SPRING_MASS,
            ),
            target: parked,
            trail: ParticleTrail::new(seed),
            trail_nodes: FnvHashMap::default(),
            evict_armed: false,
            evict_tick: Rc::new(RefCell::new(None)),
            document: document.clone(),
            layer,
            ring,
            ring_scale,
            ring_spin,
            dot,
            glow,
            glow_scale,
            glow_blob,
            bracket_l,
            bracket_r,
        }));

        // One shared timeout callback: drain the oldest particle, then re-arm
        // while any remain. Built once so repeated arming never allocates.
        let tick_slot = fx.borrow().evict_tick.clone();
        let fx_tick = fx.clone();
        *tick_slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let rearm = {
                let mut fx = fx_tick.borrow_mut();
                fx.evict_armed = false;
                if let Some(oldest) = fx.trail.evict_oldest() {
                    if let Some(node) = fx.trail_nodes.remove(&oldest.id) {
                        node.remove();
                    }
                }
                !fx.trail.is_empty()
            };
            if rearm {
                fx_tick.borrow_mut().arm_evict();
            }
        }) as Box<dyn FnMut()>));

        Ok(fx)
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32, hovering: bool) {
        let was_hovering = self.state.is_hovering();
        self.state.pointer_moved(hovering);
        if hovering != was_hovering {
            log::debug!("[cursor] hover={hovering}");
        }
        self.target = Vec2::new(x, y);
        if self.trail.observe(x, y).is_some() {
            if let Some(newest) = self.trail.iter().last().copied() {
                self.spawn_particle_node(&newest);
            }
            self.drop_orphan_nodes();
            self.arm_evict();
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        // repeat pointerdown without a pointerup in between fires nothing
        if self.state.pointer_down() {
            log::info!("[cursor] press at ({x:.0}, {y:.0})");
            self.spawn_ripple();
        }
    }

    pub fn pointer_up(&mut self) {
        _ = self.state.pointer_up();
    }

    pub fn pointer_left(&mut self) {
        self.state.pointer_left();
        log::debug!("[cursor] pointer left the viewport");
    }

    /// Advance the spring and write this frame's transforms and opacities.
    pub fn render(&mut self, dt: f32) {
        self.spring.step(self.target, dt);
        let v = cursor_visuals(&self.state);
        let pos = self.spring.position;

        let centered = fmt::translate_centered(pos.x, pos.y);
        dom::set_style(&self.ring, "transform", &centered);
        dom::set_style(&self.glow, "transform", &centered);
        let shown = if v.visible { "1" } else { "0" };
        dom::set_style(&self.ring, "opacity", shown);
        dom::set_style(&self.glow, "opacity", shown);

        dom::set_style(&self.ring_scale, "transform", &fmt::scale(v.ring_scale));
        dom::set_style(&self.ring_spin, "opacity", &format!("{:.2}", v.ring_opacity));
        dom::set_style(&self.dot, "transform", &fmt::scale(v.dot_scale));
        dom::set_style(&self.glow_scale, "transform", &fmt::scale(v.glow_scale));

        // hover recolors the glow and reveals the brackets
        dom::set_class_flag(&self.glow_blob, "is-hovering", self.state.is_hovering());

        let bracket_opacity = if v.visible && v.brackets { "0.7" } else { "0" };
        dom::set_style(
            &self.bracket_l,
            "transform",
            &fmt::translate_offset(pos.x, pos.y, -20.0, -10.0),
        );
        dom::set_style(
            &self.bracket_r,
            "transform",
            &fmt::translate_offset(pos.x, pos.y, 20.0, -10.0),
        );
        dom::set_style(&self.bracket_l, "opacity", bracket_opacity);
        dom::set_style(&self.bracket_r, "opacity", bracket_opacity);
    }

    fn spawn_particle_node(&mut self, particle: &Particle) {
        let Ok(node) = dom::create_div(&self.document, "cursor-particle") else {
            return;
        };
        _ = node.set_attribute(
            "style",
            &fmt::particle_style(particle.x, particle.y, particle.scale, particle.opacity),
        );
        _ = self.layer.append_child(&node);
        self.trail_nodes.insert(particle.id, node);
    }

    /// A spawn that overflows the trail window drops the oldest entry without
    /// a timer firing; sweep any node whose particle is gone.
    fn drop_orphan_nodes(&mut self) {
        if self.trail_nodes.len() <= self.trail.len() {
            return;
        }
        let live: Vec<u64> = self.trail.iter().map(|p| p.id).collect();
        self.trail_nodes.retain(|id, node| {
            let keep = live.contains(id);
            if !keep {
                node.remove();
            }
            keep
        });
    }

    fn spawn_ripple(&mut self) {
        let Ok(node) = dom::create_div(&self.document, "cursor-ripple") else {
            return;
        };
        let pos = self.spring.position;
        _ = node.set_attribute("style", &fmt::point_style(pos.x, pos.y));
        _ = self.layer.append_child(&node);

        // drop the element once its expand animation has played out
        let cleanup = Closure::wrap(Box::new(move || node.remove()) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                cleanup.as_ref().unchecked_ref(),
                RIPPLE_DURATION_MS as i32,
            );
        }
        cleanup.forget();
    }

    fn arm_evict(&mut self) {
        if self.evict_armed || self.trail.is_empty() {
            return;
        }
        let tick = self.evict_tick.clone();
        let tick_ref = tick.borrow();
        let Some(cb) = tick_ref.as_ref() else {
            return;
        };
        if let Some(w) = web::window() {
            if w.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                PARTICLE_EVICT_DELAY_MS,
            )
            .is_ok()
            {
                self.evict_armed = true;
            }
        }
    }
}
