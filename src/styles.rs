// Stylesheets injected at runtime. Page layout and colours come from the
// site's own stylesheet; these cover only what the effects create.

/// Keyframes and helper classes used by particles, trail, ripple, reveal and
/// the mobile menu.
pub const EFFECT_CSS: &str = r#"
@keyframes particleFloat {
    0% { transform: translateY(0) rotate(0deg); opacity: 0; }
    10% { opacity: 1; }
    90% { opacity: 1; }
    100% { transform: translateY(-100vh) rotate(360deg); opacity: 0; }
}
@keyframes cursorTrail {
    0% { transform: scale(1); opacity: 1; }
    100% { transform: scale(0); opacity: 0; }
}
@keyframes ripple {
    0% { transform: scale(0); opacity: 1; }
    100% { transform: scale(2); opacity: 0; }
}
@keyframes fadeOut {
    from { opacity: 1; }
    to { opacity: 0; }
}
@keyframes slideInUp {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}
.mobile-active {
    display: flex !important;
    flex-direction: column;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    background: var(--glass-bg);
    backdrop-filter: blur(40px);
    border: 1px solid var(--glass-border);
    border-radius: 16px;
    margin-top: 8px;
    padding: 20px;
    box-shadow: var(--shadow-heavy);
}
.menu-toggle.active span:nth-child(1) { transform: rotate(45deg) translate(5px, 5px); }
.menu-toggle.active span:nth-child(2) { opacity: 0; }
.menu-toggle.active span:nth-child(3) { transform: rotate(-45deg) translate(7px, -6px); }
.in-view { animation: slideInUp 0.8s cubic-bezier(0.4, 0, 0.2, 1) forwards; }
"#;

/// Styles for the quick navigation overlay; added on open, removed on close.
pub const QUICK_NAV_CSS: &str = r#"
.quick-nav-overlay {
    position: fixed; top: 0; left: 0; width: 100%; height: 100%;
    background: rgba(0, 0, 0, 0.8);
    backdrop-filter: blur(20px);
    display: flex; align-items: center; justify-content: center;
    z-index: 10001;
    animation: fadeIn 0.2s ease;
}
.quick-nav-content {
    position: relative;
    background: var(--glass-bg);
    backdrop-filter: blur(40px);
    border: 1px solid var(--glass-border);
    border-radius: 20px;
    padding: 32px;
    min-width: 300px;
    animation: slideUp 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}
.quick-nav-header { text-align: center; margin-bottom: 24px; }
.quick-nav-header h3 { color: var(--text-primary); font-size: 1.3rem; font-weight: 600; margin-bottom: 8px; }
.quick-nav-hint { color: var(--text-secondary); font-size: 0.9rem; }
.quick-nav-close {
    position: absolute; top: 12px; right: 12px;
    background: none; border: none; cursor: pointer;
    color: var(--text-secondary); font-size: 1.2rem;
}
.quick-nav-items { display: flex; flex-direction: column; gap: 12px; }
.quick-nav-item {
    display: flex; align-items: center; gap: 16px;
    padding: 12px 16px; border-radius: 12px; cursor: pointer;
    transition: all 0.2s ease; border: 1px solid transparent;
}
.quick-nav-item:hover { background: var(--glass-hover); border-color: var(--glass-border); }
.nav-key {
    width: 24px; height: 24px;
    background: var(--accent-blue); color: white; border-radius: 6px;
    display: flex; align-items: center; justify-content: center;
    font-weight: 600; font-size: 0.9rem;
}
.nav-label { color: var(--text-primary); font-weight: 500; }
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
@keyframes slideUp {
    from { transform: translateY(20px) scale(0.95); opacity: 0; }
    to { transform: translateY(0) scale(1); opacity: 1; }
}
"#;
