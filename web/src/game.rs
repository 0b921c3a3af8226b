use crate::draw;
use crate::utils::js_random_seed;
use hanoi_core as game;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

const WIN_MESSAGE: &str = "Congratulations, you solved the Tower of Hanoi!";
const DEFAULT_DISKS: game::DiskCount = 3;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    PointerDown(game::Point),
    PointerMove(game::Point),
    PointerUp(game::Point),
    NewGame,
    SetDiskCount(game::DiskCount),
    ShowHints,
}

#[derive(Properties, Clone, Debug, Default, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
    /// Disk count for the first game
    #[prop_or_default]
    pub disks: Option<game::DiskCount>,
}

fn create_game(seed: u64, config: game::GameConfig) -> game::HanoiGame {
    use game::DiskStackGenerator;

    let layout = game::Layout::default();
    let stack = game::RandomColorGenerator::new(seed).generate(config, &layout);
    game::HanoiGame::with_layout(stack, layout)
}

fn pointer_pos(e: &PointerEvent) -> game::Point {
    game::Point::new(e.offset_x() as f64, e.offset_y() as f64)
}

#[derive(Debug)]
pub(crate) struct GameView {
    config: game::GameConfig,
    game: game::HanoiGame,
    seed: u64,
    hints: Option<String>,
    canvas_ref: NodeRef,
}

impl GameView {
    fn repaint(&self) {
        if let Some(canvas) = self.canvas_ref.cast::<web_sys::HtmlCanvasElement>() {
            draw::render(&canvas, &self.game);
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = game::GameConfig::new(props.disks.unwrap_or(DEFAULT_DISKS));
        let seed = props.seed.unwrap_or_else(js_random_seed);
        Self {
            config,
            game: create_game(seed, config),
            seed,
            hints: None,
            canvas_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            PointerDown(pos) => self.game.pick_up(pos).has_update(),
            PointerMove(pos) => self.game.drag(pos).has_update(),
            PointerUp(pos) => {
                let outcome = self.game.drop_at(pos);
                if outcome.is_win() {
                    log::debug!("board solved");
                    gloo::dialogs::alert(WIN_MESSAGE);
                }
                outcome.has_update()
            }
            NewGame => {
                self.seed = js_random_seed();
                self.game = create_game(self.seed, self.config);
                true
            }
            SetDiskCount(disks) => {
                // takes effect on the next new game, like the original select box
                self.config = game::GameConfig::new(disks);
                false
            }
            ShowHints => {
                let moves = game::solve(self.config.disks, game::Peg::A, game::Peg::C, game::Peg::B);
                self.hints = Some(game::hint_text(&moves));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let onpointerdown = ctx
            .link()
            .callback(|e: PointerEvent| PointerDown(pointer_pos(&e)));
        let onpointermove = ctx
            .link()
            .callback(|e: PointerEvent| PointerMove(pointer_pos(&e)));
        let onpointerup = ctx
            .link()
            .callback(|e: PointerEvent| PointerUp(pointer_pos(&e)));
        let cb_new_game = ctx.link().callback(|_| NewGame);
        let cb_show_hints = ctx.link().callback(|_| ShowHints);
        let on_disks_change = ctx.link().callback(|e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            SetDiskCount(select.value().parse().unwrap_or(DEFAULT_DISKS))
        });

        let (width, height) = self.game.layout().canvas_size;

        html! {
            <div class="hanoi">
                <nav>
                    <label for="disks">{"Disks"}</label>
                    <select id="disks" onchange={on_disks_change}>
                        {
                            for (1..=game::GameConfig::MAX_DISKS).map(|n| html! {
                                <option value={n.to_string()} selected={n == self.config.disks}>
                                    {n}
                                </option>
                            })
                        }
                    </select>
                    <button onclick={cb_new_game}>{"New game"}</button>
                    <button onclick={cb_show_hints}>{"Show hints"}</button>
                </nav>
                <canvas
                    ref={self.canvas_ref.clone()}
                    width={(width as u32).to_string()}
                    height={(height as u32).to_string()}
                    {onpointerdown} {onpointermove} {onpointerup}
                />
                <textarea
                    id="hints"
                    readonly=true
                    rows="12"
                    value={self.hints.clone().unwrap_or_default()}
                />
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.repaint();
    }
}
