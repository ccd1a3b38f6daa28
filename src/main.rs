use gravity_sim::app;

fn main() {
    app::run();
}
