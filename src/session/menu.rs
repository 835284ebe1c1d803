use crate::core::library::Role;

// Actions offered after login, which ones are reachable depends on the role's menu.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuAction {
    AddBook,
    RemoveBook,
    BorrowBook,
    ReturnBook,
    ViewAllBooks,
    Logout,
}

// Actions offered at the top level without logging in
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GuestAction {
    Register,
    Login,
    ViewBooks,
    BuyBook,
    Exit,
}

#[derive(Debug)]
pub struct MenuItem<A: 'static> {
    pub choice: i64,
    pub label: &'static str,
    pub action: A,
}

// Menu is a static dispatch table from the number typed by the user to an action
#[derive(Debug)]
pub struct Menu<A: 'static> {
    pub title: &'static str,
    pub items: &'static [MenuItem<A>],
}

impl<A: Copy> Menu<A> {
    pub fn action(&self, choice: i64) -> Option<A> {
        self.items.iter().find(|item| item.choice == choice).map(|item| item.action)
    }

    pub fn render(&self) -> String {
        let mut out = format!("\n{}", self.title);
        for item in self.items {
            out.push_str(format!("\n{}. {}", item.choice, item.label).as_str());
        }
        out
    }
}

pub static GUEST_MENU: Menu<GuestAction> = Menu {
    title: "--- Welcome to the Library Management System ---",
    items: &[
        MenuItem { choice: 1, label: "Register", action: GuestAction::Register },
        MenuItem { choice: 2, label: "Login", action: GuestAction::Login },
        MenuItem { choice: 3, label: "View Books (Guest)", action: GuestAction::ViewBooks },
        MenuItem { choice: 4, label: "Buy Book (Guest)", action: GuestAction::BuyBook },
        MenuItem { choice: 5, label: "Exit", action: GuestAction::Exit },
    ],
};

pub static LIBRARIAN_MENU: Menu<MenuAction> = Menu {
    title: "--- Librarian Menu ---",
    items: &[
        MenuItem { choice: 1, label: "Add Book", action: MenuAction::AddBook },
        MenuItem { choice: 2, label: "Remove Book", action: MenuAction::RemoveBook },
        MenuItem { choice: 3, label: "View All Books", action: MenuAction::ViewAllBooks },
        MenuItem { choice: 4, label: "Logout", action: MenuAction::Logout },
    ],
};

pub static MEMBER_MENU: Menu<MenuAction> = Menu {
    title: "--- Member Menu ---",
    items: &[
        MenuItem { choice: 1, label: "Borrow Book", action: MenuAction::BorrowBook },
        MenuItem { choice: 2, label: "Return Book", action: MenuAction::ReturnBook },
        MenuItem { choice: 3, label: "View All Books", action: MenuAction::ViewAllBooks },
        MenuItem { choice: 4, label: "Logout", action: MenuAction::Logout },
    ],
};

impl Role {
    pub fn menu(&self) -> &'static Menu<MenuAction> {
        match self {
            Role::Member => &MEMBER_MENU,
            Role::Librarian => &LIBRARIAN_MENU,
        }
    }
}
