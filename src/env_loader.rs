use std::env;
use std::path::PathBuf;

fn fallback_dotenv_path(root: Option<PathBuf>) -> Option<PathBuf> {
    Some(root?.join(".env"))
}

pub fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let fallback = fallback_dotenv_path(env::var_os("MONTHROLL_ROOT").map(PathBuf::from));

    let Some(path) = fallback else {
        return;
    };
    if path.is_file() {
        let _ = dotenvy::from_path(&path);
    }
}
