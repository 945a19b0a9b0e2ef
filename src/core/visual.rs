use smallvec::SmallVec;

/// Inline style declarations in application order: `(property, value)`.
pub type StyleDecls = SmallVec<[(&'static str, String); 4]>;

/// A computed presentational state the renderer can write onto an element.
pub trait VisualState {
    fn decls(&self) -> StyleDecls;
}

/// Format a pixel length, trimming a redundant fraction.
#[inline]
pub fn px(v: f64) -> String {
    format!("{}px", trim(v))
}

/// Format an angle in degrees.
#[inline]
pub fn deg(v: f64) -> String {
    format!("{}deg", trim(v))
}

#[inline]
pub fn translate_y(v: f64) -> String {
    format!("translateY({})", px(v))
}

// Values stay short in the style attribute: 30 rather than 30.000000000004.
fn trim(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        // avoids "-0px"
        return "0".to_string();
    }
    format!("{}", r)
}
