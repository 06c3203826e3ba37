/// Circle drawn inside a button, centred on the click point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// `rect` is the button's (left, top, width, height) in client
    /// coordinates; `pointer` is the click's client position.
    pub fn compute(rect: (f64, f64, f64, f64), pointer: (f64, f64)) -> Self {
        let (rect_left, rect_top, width, height) = rect;
        let size = width.max(height);
        Self {
            size,
            left: pointer.0 - rect_left - size / 2.0,
            top: pointer.1 - rect_top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {s}px; height: {s}px; left: {l}px; top: {t}px;",
            s = self.size,
            l = self.left,
            t = self.top
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub geometry: RippleGeometry,
}

/// Live ripples on one button. No cap: rapid clicks stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleSet {
    next_id: u64,
    active: Vec<Ripple>,
}

impl RippleSet {
    pub fn spawn(&mut self, geometry: RippleGeometry) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Ripple { id, geometry });
        id
    }

    pub fn expire(&mut self, id: u64) -> bool {
        let before = self.active.len();
        self.active.retain(|r| r.id != id);
        self.active.len() != before
    }

    pub fn active(&self) -> &[Ripple] {
        &self.active
    }
}
