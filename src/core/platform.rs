use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{
    count_sessions_for_platform, delete_platform, find_platform, find_platform_by_name,
    insert_platform, list_platforms,
};
use crate::errors::{AppError, AppResult};
use crate::models::platform::Platform;
use crate::ui::messages::{info, warning};
use crate::utils::table::{Column, Table};

pub struct PlatformLogic;

impl PlatformLogic {
    pub fn add(pool: &mut DbPool, name: &str) -> AppResult<Platform> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Other("Platform name cannot be empty".into()));
        }

        if let Some(existing) = find_platform_by_name(&pool.conn, name)? {
            return Err(AppError::PlatformExists(existing.name));
        }

        let id = insert_platform(&pool.conn, name)?;
        if let Err(e) = audit(&pool.conn, "platform_add", name, &format!("platform #{id}")) {
            warning(format!("Failed to write internal log: {}", e));
        }

        find_platform(&pool.conn, &id.to_string())?
            .ok_or_else(|| AppError::PlatformNotFound(id.to_string()))
    }

    /// Remove a platform by id or name. Platforms still referenced by
    /// sessions are kept, so the history never loses its platform name.
    pub fn remove(pool: &mut DbPool, key: &str) -> AppResult<Platform> {
        let platform =
            find_platform(&pool.conn, key)?.ok_or_else(|| AppError::PlatformNotFound(key.into()))?;

        let used = count_sessions_for_platform(&pool.conn, platform.id)?;
        if used > 0 {
            return Err(AppError::PlatformInUse(platform.name, used));
        }

        delete_platform(&pool.conn, platform.id)?;
        if let Err(e) = audit(
            &pool.conn,
            "platform_del",
            &platform.name,
            &format!("platform #{}", platform.id),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(platform)
    }

    pub fn print_list(pool: &mut DbPool) -> AppResult<()> {
        let platforms = list_platforms(&pool.conn)?;

        if platforms.is_empty() {
            info("No platforms added yet. Add the apps you work with: platform --add NAME");
            return Ok(());
        }

        let mut table = Table::new(vec![Column::right("ID", 4), Column::left("Platform", 24)]);
        for p in platforms {
            table.add_row(vec![p.id.to_string(), p.name]);
        }
        print!("{}", table.render());
        Ok(())
    }
}
