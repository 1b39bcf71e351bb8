use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

const SERVICE: &str = "section-titles";

fn init_logging() {
    // 提前加载 .env，使得 RUST_LOG / LOG_FORMAT 等环境变量生效
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = SERVICE, event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let instance_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = SERVICE,
            event = "panic",
            %instance_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // 线程数：config.toml 优先，其次环境变量 TOKIO_WORKER_THREADS
    let worker_threads = match configs::AppConfig::load_or_env() {
        Ok(cfg) => cfg.server.worker_threads,
        Err(e) => {
            error!(service = SERVICE, event = "config_invalid", error = %e, "invalid configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        %instance_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "server starting"
    );

    rt.block_on(async move {
        let server_task = tokio::spawn(async move {
            if let Err(e) = server::run().await {
                error!(service = SERVICE, event = "run_failed", error = %e, "server::run returned error");
                Err(e)
            } else {
                Ok(())
            }
        });

        tokio::select! {
            res = server_task => {
                match res {
                    Ok(Ok(())) => {
                        info!(service = SERVICE, event = "stop", %instance_id, pid, "server stopped normally");
                        std::process::ExitCode::SUCCESS
                    }
                    // 错误已在上面记录
                    Ok(Err(_)) => std::process::ExitCode::FAILURE,
                    Err(e) => {
                        error!(service = SERVICE, event = "task_join_error", error = %e, "server task join error");
                        std::process::ExitCode::FAILURE
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                // 写入是单次 rename，中止任务不会留下半写的配置文件
                info!(service = SERVICE, event = "shutdown_signal", %instance_id, pid, "received Ctrl+C, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
