use dioxus::prelude::*;
use shared::user::User;

#[derive(Clone, Copy, Debug)]
pub struct Auth {
    state: Signal<Option<User>>,
}

impl Auth {
    pub fn new(state: Signal<Option<User>>) -> Self {
        Self { state }
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.state.set(user);
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().clone()
    }

    pub fn netid(&self) -> Option<String> {
        self.state.read().as_ref().and_then(|u| u.netid.clone())
    }
}

pub fn use_auth() -> Auth {
    use_context::<Auth>()
}
