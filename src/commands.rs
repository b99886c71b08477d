macro_rules! list {
    ($($pub:vis $module:ident: {$($cmd:ident),+}),+ $(,)?) => {
        $(
            $pub mod $module;

            $(
                use $module::$cmd;
            )+
        )+

        pub fn list() -> Vec<crate::utils::poise::Command> {
            vec![
                $($($cmd()),+),+
            ]
        }
    };
}

list! {
    help: {help},
    pub hangman: {newgame, newcustomgame, guess, stopgame}
}

trait LogCommands {
    async fn log_command(&self);
}

impl LogCommands for crate::utils::Context<'_> {
    async fn log_command(&self) {
        let channel = self
            .channel_id()
            .name(self.http())
            .await
            .map_or("dms".to_string(), |c| format!("#{c}"));
        tracing::info!(
            "@{} ({}): {}",
            self.author().name,
            channel,
            self.invocation_string()
        );
    }
}
