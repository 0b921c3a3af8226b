use hanoi_core as game;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const POST_COLOR: &str = "black";
const LABEL_COLOR: &str = "black";
const LABEL_FONT: &str = "20px Arial";

/// Full repaint of the board: posts, peg labels, stacked disks, and the disk
/// in hand last so it is drawn over everything else.
pub(crate) fn render(canvas: &HtmlCanvasElement, game: &game::HanoiGame) {
    let Some(ctx) = context_2d(canvas) else {
        log::error!("Canvas has no 2d context");
        return;
    };
    let layout = game.layout();
    let (width, height) = layout.canvas_size;

    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_fill_style_str(POST_COLOR);
    for peg in game::Peg::ALL {
        fill_rect(&ctx, layout.post_rect(peg));
    }

    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    for peg in game::Peg::ALL {
        let pos = layout.label_pos(peg);
        if let Err(err) = ctx.fill_text(&peg.to_string(), pos.x, pos.y) {
            log::error!("Failed to draw label for {}: {:?}", peg, err);
        }
    }

    for peg in game::Peg::ALL {
        for (i, disk) in game.tower(peg).iter().enumerate() {
            ctx.set_fill_style_str(&disk.color.to_string());
            fill_rect(&ctx, layout.disk_rect(peg, i, disk.width));
        }
    }

    if let Some(held) = game.held() {
        let disk = held.disk();
        ctx.set_fill_style_str(&disk.color.to_string());
        fill_rect(&ctx, layout.held_disk_rect(held.center(), disk.width));
    }
}

fn fill_rect(ctx: &CanvasRenderingContext2d, rect: game::Rect) {
    ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}
