use web_sys::window;

const USERNAME_KEY: &str = "username";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Login name written by the login page
pub fn get_username() -> Option<String> {
    get_item(USERNAME_KEY)
}

/// Raw `user` JSON blob written by the login page
pub fn get_user_blob() -> Option<String> {
    get_item(USER_KEY)
}
