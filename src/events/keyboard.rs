use crate::context::FxContext;
use crate::core::{command_for_key, KeyCommand, Modifiers};
use crate::dom;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, ctx: &FxContext) {
    let mods = Modifiers {
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
    };
    let Some(cmd) = command_for_key(&ev.key(), mods) else {
        return;
    };
    match cmd {
        KeyCommand::Dismiss => ctx.dismiss_all(),
        KeyCommand::OpenQuickNav => {
            ev.prevent_default();
            ctx.open_quick_nav();
        }
        KeyCommand::JumpTo(section) => {
            log::debug!("[keys] jump to {}", section.id());
            ctx.jump_to(section);
        }
    }
}

pub fn wire_global_keydown(ctx: &FxContext) {
    let ctx = ctx.clone();
    let target = ctx.document.clone();
    dom::listen(&target, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &ctx);
    });
}
