#[cfg(test)]
mod tests {
    use tasker::commands::menu::{Action, MenuChoice};
    use tasker::libs::input::{
        parse_description, parse_index, parse_keyword, parse_priority_choice, parse_sort_choice, parse_status_choice,
        InputError,
    };
    use tasker::libs::task::{InvalidPriority, Keyword, Priority, SortField, Status};

    #[test]
    fn test_menu_choices() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::Run(Action::ListAll));
        assert_eq!(" 4 ".parse::<MenuChoice>().unwrap(), MenuChoice::Run(Action::MarkComplete));
        assert_eq!("8".parse::<MenuChoice>().unwrap(), MenuChoice::Run(Action::SetPriority));
        assert_eq!("9".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);

        for bad in ["", "0", "10", "quit", "1.5"] {
            assert!(matches!(bad.parse::<MenuChoice>(), Err(InputError::InvalidChoice(_))), "{bad:?}");
        }
    }

    #[test]
    fn test_parse_index_bounds() {
        assert_eq!(parse_index("1", 3).unwrap(), 0);
        assert_eq!(parse_index("3\n", 3).unwrap(), 2);
        assert_eq!(parse_index("4", 3), Err(InputError::InvalidIndex("4".to_string())));
        assert!(parse_index("0", 3).is_err());
        assert!(parse_index("-1", 3).is_err());
        assert!(parse_index("", 3).is_err());
        assert!(parse_index("1", 0).is_err());
    }

    #[test]
    fn test_parse_status_and_sort_choices() {
        assert_eq!(parse_status_choice("1").unwrap(), Status::Todo);
        assert_eq!(parse_status_choice("2").unwrap(), Status::Done);
        assert!(matches!(parse_status_choice("3"), Err(InputError::InvalidStatus(_))));

        assert_eq!(parse_sort_choice("1").unwrap(), SortField::UpdatedAt);
        assert_eq!(parse_sort_choice("2").unwrap(), SortField::Status);
        assert!(matches!(parse_sort_choice("status"), Err(InputError::InvalidSort(_))));
    }

    #[test]
    fn test_parse_priority_choice() {
        assert_eq!(parse_priority_choice("1").unwrap(), Priority::High);
        assert_eq!(parse_priority_choice(" 2 ").unwrap(), Priority::Medium);
        assert_eq!(parse_priority_choice("3").unwrap(), Priority::Low);
        for bad in ["0", "4", "haute", ""] {
            assert!(matches!(parse_priority_choice(bad), Err(InputError::InvalidPriority(_))), "{bad:?}");
        }
    }

    #[test]
    fn test_parse_description() {
        assert_eq!(parse_description("buy milk").unwrap(), "buy milk");
        assert_eq!(parse_description("  padded  ").unwrap(), "  padded  ");
        assert_eq!(parse_description(""), Err(InputError::EmptyDescription));
        assert_eq!(parse_description(" \t "), Err(InputError::EmptyDescription));
    }

    #[test]
    fn test_keyword() {
        assert_eq!(parse_keyword("   "), Err(InputError::EmptyKeyword));

        let keyword = parse_keyword("  buy ").unwrap();
        assert_eq!(keyword.as_str(), "buy");
        assert!(keyword.matches("Buy milk"));
        assert!(!keyword.matches("call mom"));

        let keyword = Keyword::parse("ÉTÉ").unwrap();
        assert!(keyword.matches("réviser l'été"));

        let keyword = Keyword::parse("50%_off").unwrap();
        assert!(keyword.matches("coupon 50%_off"));
        assert!(!keyword.matches("coupon 50 off"));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::default(), Status::Todo);
        assert_eq!(Status::Todo.to_string(), "À faire");
        assert_eq!(Status::Done.to_string(), "Accomplie");
        assert_eq!("Accomplie".parse::<Status>().unwrap(), Status::Done);
        assert!("Terminée".parse::<Status>().is_err());
    }

    #[test]
    fn test_priority_levels() {
        assert_eq!(Priority::default(), Priority::Low);
        assert_eq!(Priority::try_from(1).unwrap(), Priority::High);
        assert_eq!(Priority::try_from(2).unwrap().level(), 2);
        assert_eq!(Priority::try_from(0), Err(InvalidPriority(0)));
        assert_eq!(Priority::try_from(4), Err(InvalidPriority(4)));
        assert!(Priority::High < Priority::Low);
    }
}
