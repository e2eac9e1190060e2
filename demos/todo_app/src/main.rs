use anyhow::Context;
use todo_app::AppContext;
use todos_navigation::RouteOptions;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = RouteOptions {
        base: std::env::args().nth(1),
        ..Default::default()
    };
    let base = options.base.clone().unwrap_or_default();
    let ctx = AppContext::new(options).context("failed to build route table")?;

    ctx.store
        .subscribe(|s| log::info!("totalTodos = {}", s.total_todos));

    for route in ctx.routes.routes() {
        log::debug!("{} -> {:?}", route.path(), route.view());
    }

    let base = base.trim_end_matches('/');
    println!("{}", ctx.render(&format!("{base}/")));
    for _ in 0..3 {
        ctx.store.increment();
    }
    println!("{}", ctx.render(&format!("{base}/stats")));
    ctx.store.set_total_todos(42);
    ctx.store.increment();
    println!("{}", ctx.render(&format!("{base}/stats")));
    println!("{}", ctx.render(&format!("{base}/missing")));
    Ok(())
}
