use trivia_quiz::QuizApp;
use trivia_quiz::app::Preferences;
use trivia_quiz::config::QuizConfig;
use trivia_quiz::storage;

fn create_app(config: QuizConfig, cc: &eframe::CreationContext<'_>) -> QuizApp {
    let mut app = QuizApp::new(config, storage::default_store());
    if let Some(saved) = cc
        .storage
        .and_then(|s| eframe::get_value::<Preferences>(s, eframe::APP_KEY))
    {
        app.restore_preferences(saved);
    }
    app.load_categories();
    app
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = match QuizConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Trivia Quiz",
        options,
        Box::new(move |cc| Ok(Box::new(create_app(config, cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let config = match QuizConfig::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("invalid configuration: {e}");
                return;
            }
        };

        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("canvas #the_canvas_id not found");
            return;
        };

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(create_app(config, cc)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("failed to start app: {e:?}");
        }
    });
}
