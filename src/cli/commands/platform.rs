use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::platform::PlatformLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Platform { add, remove, list } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(name) = add {
            let p = PlatformLogic::add(&mut pool, name)?;
            success(format!("Platform '{}' added (id {}).", p.name, p.id));
        }

        if let Some(key) = remove {
            let p = PlatformLogic::remove(&mut pool, key)?;
            success(format!("Platform '{}' removed.", p.name));
        }

        if *list || (add.is_none() && remove.is_none()) {
            PlatformLogic::print_list(&mut pool)?;
        }
    }

    Ok(())
}
