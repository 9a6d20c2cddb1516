mod components;
mod config;
mod layout;
mod model;
mod present;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
