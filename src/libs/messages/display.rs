//! Display implementation for tasker messages.
//!
//! Every line the application shows to a person is produced here, so the
//! wording of the whole interface can be reviewed in one place. The interface
//! speaks French, like the status labels stored in the database.

use super::types::Message;
use crate::libs::input::InputError;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STARTUP / SHUTDOWN MESSAGES ===
            Message::DbConnected => "Vous êtes connecté à la base de données.".to_string(),
            Message::TasksTableReady => "Table \"tasks\" créée ou déjà existante".to_string(),
            Message::DbConnectionFailed(error) => format!("Erreur lors de la connexion à la base de données : {}", error),
            Message::ConfigLoadFailed(error) => format!("Configuration invalide : {}", error),
            Message::DbCloseFailed(error) => format!("Erreur lors de la fermeture de la base de données : {}", error),
            Message::CredentialsIgnored => "DB_USER et DB_PASSWORD sont ignorés : la base SQLite n'utilise pas d'identifiants.".to_string(),
            Message::Goodbye => "Au revoir !".to_string(),

            // === MENU MESSAGES ===
            Message::MainMenu => concat!(
                "Bienvenue dans votre gestionnaire de tâches ! Sélectionnez :\n",
                "1. Voir toutes les tâches\n",
                "2. Ajouter une tâche\n",
                "3. Supprimer une tâche\n",
                "4. Marquer une tâche comme accomplie\n",
                "5. Filtrer les tâches par statut\n",
                "6. Rechercher une tâche par mot-clé\n",
                "7. Trier les tâches\n",
                "8. Définir la priorité d'une tâche\n",
                "9. Quitter le gestionnaire de tâches",
            )
            .to_string(),
            Message::InvalidChoice => "Choix invalide.".to_string(),

            // === LISTING MESSAGES ===
            Message::NoTasksToShow => "Aucune tâche à afficher.".to_string(),
            Message::NoTasksToDelete => "Aucune tâche à supprimer.".to_string(),
            Message::NoTasksToComplete => "Aucune tâche à marquer comme accomplie.".to_string(),
            Message::NoTasksToPrioritize => "Aucune tâche à prioriser.".to_string(),
            Message::NoTasksWithStatus(status) => format!("Aucune tâche avec le statut \"{}\".", status),
            Message::NoTasksMatching(keyword) => format!("Aucune tâche ne correspond à \"{}\".", keyword),

            // === PROMPTS ===
            Message::PromptTaskDescription => "Quelle tâche voulez-vous ajouter ?".to_string(),
            Message::PromptDeleteIndex => "Quelle tâche voulez-vous supprimer ? (indiquez le numéro)".to_string(),
            Message::PromptCompleteIndex => "Quelle tâche voulez-vous indiquer comme accomplie ? (indiquez le numéro)".to_string(),
            Message::PromptPriorityIndex => "Quelle tâche voulez-vous prioriser ? (indiquez le numéro)".to_string(),
            Message::PromptPriorityLevel => "Quelle priorité ? 1. Haute  2. Moyenne  3. Basse".to_string(),
            Message::PromptStatusFilter => "Quel statut afficher ? 1. À faire  2. Accomplie".to_string(),
            Message::PromptKeyword => "Quel mot-clé voulez-vous rechercher ?".to_string(),
            Message::PromptSortField => "Trier par : 1. Date de mise à jour  2. Statut".to_string(),

            // === TASK MESSAGES ===
            Message::TaskAdded(description) => format!("Tâche \"{}\" ajoutée à la base de données !", description),
            Message::TaskDeleted(description) => format!("La tâche \"{}\" a été supprimée !", description),
            Message::TaskCompleted(description) => format!("La tâche \"{}\" a été marquée comme accomplie !", description),
            Message::TaskPrioritySet(description, priority) => {
                format!("La tâche \"{}\" est maintenant en {} !", description, priority)
            }

            // === INPUT ERRORS ===
            Message::InvalidTaskNumber => "Numéro de tâche invalide.".to_string(),
            Message::NoKeyword => "Aucun mot-clé saisi.".to_string(),
            Message::EmptyDescription => "La description de la tâche ne peut pas être vide.".to_string(),
            Message::InvalidPriority => "Priorité invalide, choisissez 1, 2 ou 3.".to_string(),
            Message::InvalidStatusChoice => "Choix de statut invalide.".to_string(),
            Message::InvalidSortChoice => "Choix de tri invalide.".to_string(),
            Message::StaleSelection => "La liste des tâches a changé depuis son affichage, veuillez réessayer.".to_string(),

            // === STORAGE ERRORS ===
            Message::FetchFailed(error) => format!("Erreur lors de la récupération des tâches : {}", error),
            Message::AddFailed(error) => format!("Erreur lors de l'ajout de la tâche : {}", error),
            Message::DeleteFailed(error) => format!("Erreur lors de la suppression de la tâche : {}", error),
            Message::UpdateFailed(error) => format!("Erreur lors de la mise à jour de la tâche : {}", error),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("{} migration(s) à appliquer", count),
            Message::RunningMigration(version, name) => format!("Migration v{} : {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} appliquée", version),
            Message::MigrationFailed(version, error) => format!("Échec de la migration v{} : {}", version, error),
            Message::AllMigrationsCompleted => "Toutes les migrations ont été appliquées".to_string(),
            Message::DatabaseVersion(version) => format!("Version du schéma : {}", version),
            Message::DatabaseUpToDate => "La base de données est à jour".to_string(),
            Message::DatabaseNeedsUpdate => "La base de données doit être mise à jour".to_string(),
            Message::MigrationHistory => "Historique des migrations :".to_string(),
            Message::MigrationHistoryEntry(version, name, applied_at) => {
                format!("  v{}: {} (appliquée le {})", version, name, applied_at)
            }
        };
        write!(f, "{}", text)
    }
}

impl From<&InputError> for Message {
    fn from(error: &InputError) -> Self {
        match error {
            InputError::InvalidChoice(_) => Message::InvalidChoice,
            InputError::InvalidIndex(_) => Message::InvalidTaskNumber,
            InputError::EmptyKeyword => Message::NoKeyword,
            InputError::EmptyDescription => Message::EmptyDescription,
            InputError::InvalidPriority(_) => Message::InvalidPriority,
            InputError::InvalidStatus(_) => Message::InvalidStatusChoice,
            InputError::InvalidSort(_) => Message::InvalidSortChoice,
            InputError::StaleSelection => Message::StaleSelection,
        }
    }
}
