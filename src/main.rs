use gesture_nav::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
