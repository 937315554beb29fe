mod app_core;
mod app_runtime;
mod boot;
mod dom_view;
mod input;
mod runtime;

fn main() {
    boot::set_phase("init", "placement engine");
    match app_runtime::start() {
        Ok(()) => boot::ready(),
        Err(message) => {
            gloo::console::warn!(message.as_str());
            boot::fail(&message);
        }
    }
}
