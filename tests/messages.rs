#[cfg(test)]
mod tests {
    use tasker::libs::input::InputError;
    use tasker::libs::messages::{self, Message};
    use tasker::libs::task::Priority;
    use tasker::{msg_debug, msg_error, msg_info, msg_print, msg_success, msg_warning};

    #[test]
    fn test_message_macros() {
        msg_print!(Message::MigrationHistory, true);
        msg_print!(Message::DatabaseVersion(2));
        msg_success!(Message::DatabaseUpToDate);
        msg_info!(Message::DatabaseNeedsUpdate);
        msg_warning!(Message::CredentialsIgnored);
        msg_error!(Message::DbConnectionFailed("unable to open database file".to_string()));
        msg_debug!(Message::AllMigrationsCompleted);
    }

    #[test]
    fn test_prefix_helpers() {
        assert_eq!(messages::success(Message::Goodbye), "✅ Au revoir !");
        assert_eq!(messages::error(Message::NoKeyword), "❌ Aucun mot-clé saisi.");
        assert_eq!(messages::warning(Message::InvalidChoice), "⚠️  Choix invalide.");
    }

    #[test]
    fn test_input_errors_map_to_guidance() {
        let cases = [
            (InputError::InvalidChoice("x".to_string()), "Choix invalide."),
            (InputError::InvalidIndex("7".to_string()), "Numéro de tâche invalide."),
            (InputError::EmptyKeyword, "Aucun mot-clé saisi."),
            (InputError::InvalidPriority("5".to_string()), "Priorité invalide, choisissez 1, 2 ou 3."),
            (InputError::InvalidSort("3".to_string()), "Choix de tri invalide."),
        ];
        for (error, expected) in cases {
            assert_eq!(Message::from(&error).to_string(), expected);
        }
    }

    #[test]
    fn test_priority_confirmation_names_the_level() {
        let message = Message::TaskPrioritySet("rapport".to_string(), Priority::Medium);
        assert_eq!(message.to_string(), "La tâche \"rapport\" est maintenant en priorité 2 (moyenne) !");
    }
}
