use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use rec_client::{
    config::Config,
    controller::FormController,
    form::{Field, FormSurface, MemoryForm},
    transport::HttpApi,
};

const HELP: &str = "commands: create | update | retrieve | delete | clear | search \
| set <field> <value> | show | help | quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    tracing::info!(base_url = %config.api_base_url, "Connecting to recommendations API");

    let api = HttpApi::new(config.api_base_url);
    let mut controller = FormController::new(MemoryForm::new(), api);

    println!("{}", HELP);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.splitn(3, ' ');
        let command = parts.next().unwrap_or_default();

        match command {
            "create" => controller.create().await,
            "update" => controller.update().await,
            "retrieve" => controller.retrieve().await,
            "delete" => controller.delete().await,
            "clear" => controller.clear(),
            "search" => controller.search().await,
            "set" => {
                let field_id = parts.next().unwrap_or_default();
                let value = parts.next().unwrap_or_default();
                match Field::from_id(field_id) {
                    Some(field) => controller.surface_mut().set(field, value),
                    None => println!("unknown field: {}", field_id),
                }
                continue;
            }
            "show" => {
                print_form(controller.surface());
                continue;
            }
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("unknown command: {}", other);
                continue;
            }
        }

        let flash = controller.surface().flash_text();
        if !flash.is_empty() {
            println!("{}", flash);
        }
        let results = controller.surface().search_results();
        if command == "search" && !results.is_empty() {
            println!("{}", results);
        }
    }

    Ok(())
}

fn print_form(form: &MemoryForm) {
    for field in Field::ALL {
        println!("{} = {}", field.id(), form.get(field));
    }
}
