//! Table reservation wizard
//!
//! 1. date + meal time
//! 2. guest details and party size
//! 3. pick a table for the slot
//!
//! Going back keeps everything entered so far.

use booking_client::BookingApi;
use chrono::{Days, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use shared::models::{DiningTable, MealTime, NewReservation, TableAvailability, all_reserved};
use shared::validation::{
    FieldError, GuestCount, card_digits, digits, validate_booking_date, validate_card,
    validate_name, validate_phone,
};

use super::{Intent, Notice, TextField, cycle};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const NO_TABLES_BANNER: &str = "No tables available for this time slot";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    DateTime,
    GuestInfo,
    Tables,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestField {
    Name,
    Phone,
    CreditCard,
}

/// Focusable widgets on step 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFocus {
    #[default]
    Date,
    Time,
    Next,
}

/// Focusable widgets on step 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoFocus {
    #[default]
    Name,
    Phone,
    CreditCard,
    Guests,
    Previous,
    ShowTables,
}

impl DateFocus {
    const ORDER: [DateFocus; 3] = [DateFocus::Date, DateFocus::Time, DateFocus::Next];
}

impl InfoFocus {
    const ORDER: [InfoFocus; 6] = [
        InfoFocus::Name,
        InfoFocus::Phone,
        InfoFocus::CreditCard,
        InfoFocus::Guests,
        InfoFocus::Previous,
        InfoFocus::ShowTables,
    ];
}

#[derive(Debug, Clone)]
pub struct ReservationPage {
    pub step: Step,

    // Step 1
    pub date_input: TextField,
    pub date: Option<NaiveDate>,
    pub time: MealTime,
    pub date_focus: DateFocus,

    // Step 2
    pub name: TextField,
    pub phone: TextField,
    pub credit_card: TextField,
    pub name_error: Option<FieldError>,
    pub phone_error: Option<FieldError>,
    pub card_error: Option<FieldError>,
    pub guests: GuestCount,
    pub info_focus: InfoFocus,

    // Step 3
    pub tables: Vec<DiningTable>,
    pub banner: Option<String>,
    pub selected_table: usize,
}

impl Default for ReservationPage {
    fn default() -> Self {
        Self {
            step: Step::default(),
            date_input: TextField::new("Date (YYYY-MM-DD)"),
            date: None,
            time: MealTime::default(),
            date_focus: DateFocus::default(),
            name: TextField::new("Name (Hangul/English)"),
            phone: TextField::new("Phone (digits only)"),
            credit_card: TextField::new("Card number (16 digits)"),
            name_error: None,
            phone_error: None,
            card_error: None,
            guests: GuestCount::default(),
            info_focus: InfoFocus::default(),
            tables: Vec::new(),
            banner: None,
            selected_table: 0,
        }
    }
}

impl ReservationPage {
    // ========== Step 1: date & time ==========

    /// Pick a date directly (stepper keys); past dates are refused
    pub fn pick_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), Notice> {
        validate_booking_date(date, today).map_err(|e| Notice::error(e.to_string()))?;
        self.date = Some(date);
        self.date_input.set(date.format(DATE_FORMAT).to_string());
        Ok(())
    }

    /// Move the picked date by `days`, starting from today when none is set
    pub fn shift_date(&mut self, days: i64, today: NaiveDate) -> Result<(), Notice> {
        let base = self.parsed_date().unwrap_or(today);
        let target = if days >= 0 {
            base.checked_add_days(Days::new(days as u64))
        } else {
            base.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        match target {
            Some(date) => self.pick_date(date, today),
            None => Ok(()),
        }
    }

    pub fn set_time(&mut self, time: MealTime) {
        self.time = time;
    }

    fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_input.value().trim(), DATE_FORMAT).ok()
    }

    /// Step 1 -> 2; needs a bookable date
    pub fn next(&mut self, today: NaiveDate) -> Result<(), Notice> {
        if self.date_input.is_empty() {
            return Err(Notice::error("Please select a date first"));
        }
        let date = self
            .parsed_date()
            .ok_or_else(|| Notice::error("Enter the date as YYYY-MM-DD"))?;
        self.pick_date(date, today)?;
        self.step = Step::GuestInfo;
        Ok(())
    }

    // ========== Step 2: guest details ==========

    /// Store a raw field value; phone and card keep digits only
    pub fn update(&mut self, field: GuestField, raw: &str) {
        match field {
            GuestField::Name => {
                self.name.set(raw);
                self.name_error = validate_name(raw).err();
            }
            GuestField::Phone => {
                let value = digits(raw);
                self.phone_error = validate_phone(&value).err();
                self.phone.set(value);
            }
            GuestField::CreditCard => {
                let value = card_digits(raw);
                self.card_error = validate_card(&value).err();
                self.credit_card.set(value);
            }
        }
    }

    pub fn adjust_guests(&mut self, diff: i32) {
        self.guests.adjust(diff);
    }

    /// Every field filled and no validation error outstanding
    pub fn all_ok(&self) -> bool {
        self.name_error.is_none()
            && self.phone_error.is_none()
            && self.card_error.is_none()
            && !self.name.is_empty()
            && !self.phone.is_empty()
            && !self.credit_card.is_empty()
    }

    pub fn previous(&mut self) {
        self.step = match self.step {
            Step::DateTime | Step::GuestInfo => Step::DateTime,
            Step::Tables => Step::GuestInfo,
        };
    }

    // ========== Step 3: tables ==========

    /// `GET /tables` for the chosen slot and move to step 3
    pub async fn fetch_tables(&mut self, api: &dyn BookingApi) -> Option<Notice> {
        let Some(date) = self.date else {
            return Some(Notice::error("Please select a date first"));
        };

        match api.tables(date, self.time).await {
            Ok(tables) => {
                self.banner = all_reserved(&tables).then(|| NO_TABLES_BANNER.to_string());
                self.selected_table = self.selected_table.min(tables.len().saturating_sub(1));
                self.tables = tables;
                self.step = Step::Tables;
                None
            }
            Err(e) => {
                tracing::warn!(%date, time = %self.time, error = %e, "Failed to load tables");
                Some(Notice::error(e.message_or("Could not load tables")))
            }
        }
    }

    /// Disabled button: nothing happens until the form is valid
    pub async fn show_tables(&mut self, api: &dyn BookingApi) -> Option<Notice> {
        if !self.all_ok() {
            return None;
        }
        self.fetch_tables(api).await
    }

    pub fn availability(&self, table: &DiningTable) -> TableAvailability {
        table.availability(self.guests.get())
    }

    pub fn selected(&self) -> Option<&DiningTable> {
        self.tables.get(self.selected_table)
    }

    /// `POST /reservations` for `table_id`, then refresh the table list
    pub async fn reserve(&mut self, api: &dyn BookingApi, table_id: i64) -> Option<Notice> {
        if !self.all_ok() {
            return Some(Notice::error("Check the input format!"));
        }
        let Some(date) = self.date else {
            return Some(Notice::error("Please select a date first"));
        };
        match self.tables.iter().find(|t| t.id == table_id) {
            Some(table) if self.availability(table).is_bookable() => {}
            _ => return None,
        }

        let request = NewReservation {
            table_id,
            date,
            time: self.time,
            name: self.name.value().to_string(),
            phone: self.phone.value().to_string(),
            credit_card: self.credit_card.value().to_string(),
            guests: self.guests.get(),
        };

        match api.create_reservation(&request).await {
            Ok(_) => {
                if let Some(refresh) = self.fetch_tables(api).await {
                    tracing::warn!(notice = %refresh.text, "Table refresh after booking failed");
                }
                Some(Notice::info("Reservation complete!"))
            }
            Err(e) => {
                tracing::warn!(table_id, error = %e, "Reservation rejected");
                Some(Notice::error(e.message_or("Reservation failed")))
            }
        }
    }

    // ========== Keys ==========

    pub fn handle_key(&mut self, key: KeyEvent, today: NaiveDate) -> Intent {
        match self.step {
            Step::DateTime => self.handle_date_key(key, today),
            Step::GuestInfo => self.handle_info_key(key),
            Step::Tables => self.handle_table_key(key),
        }
    }

    fn handle_date_key(&mut self, key: KeyEvent, today: NaiveDate) -> Intent {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                let idx = DateFocus::ORDER
                    .iter()
                    .position(|f| *f == self.date_focus)
                    .unwrap_or(0);
                let forward = key.code == KeyCode::Tab;
                self.date_focus = DateFocus::ORDER[cycle(idx, DateFocus::ORDER.len(), forward)];
                Intent::None
            }
            KeyCode::Enter => Intent::Next,
            KeyCode::Esc => Intent::None,
            _ => match self.date_focus {
                DateFocus::Date => match key.code {
                    KeyCode::Up | KeyCode::Down => {
                        let days = if key.code == KeyCode::Up { 1 } else { -1 };
                        match self.shift_date(days, today) {
                            Ok(()) => Intent::None,
                            Err(notice) => Intent::Notify(notice),
                        }
                    }
                    _ => {
                        self.date_input.edit(key);
                        self.date = None;
                        Intent::None
                    }
                },
                DateFocus::Time => {
                    match key.code {
                        KeyCode::Left => self.set_time(MealTime::Lunch),
                        KeyCode::Right => self.set_time(MealTime::Dinner),
                        KeyCode::Char(' ') => {
                            let other = match self.time {
                                MealTime::Lunch => MealTime::Dinner,
                                MealTime::Dinner => MealTime::Lunch,
                            };
                            self.set_time(other);
                        }
                        _ => {}
                    }
                    Intent::None
                }
                DateFocus::Next => Intent::None,
            },
        }
    }

    fn handle_info_key(&mut self, key: KeyEvent) -> Intent {
        match key.code {
            KeyCode::Esc => Intent::Previous,
            KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => {
                let idx = InfoFocus::ORDER
                    .iter()
                    .position(|f| *f == self.info_focus)
                    .unwrap_or(0);
                let forward = matches!(key.code, KeyCode::Tab | KeyCode::Down);
                self.info_focus = InfoFocus::ORDER[cycle(idx, InfoFocus::ORDER.len(), forward)];
                Intent::None
            }
            KeyCode::Enter => match self.info_focus {
                InfoFocus::Previous => Intent::Previous,
                _ => Intent::ShowTables,
            },
            _ => {
                match self.info_focus {
                    InfoFocus::Name => {
                        let raw = self.name.edit(key);
                        self.update(GuestField::Name, &raw);
                    }
                    InfoFocus::Phone => {
                        let raw = self.phone.edit(key);
                        self.update(GuestField::Phone, &raw);
                    }
                    InfoFocus::CreditCard => {
                        let raw = self.credit_card.edit(key);
                        self.update(GuestField::CreditCard, &raw);
                    }
                    InfoFocus::Guests => match key.code {
                        KeyCode::Left | KeyCode::Char('-') => self.adjust_guests(-1),
                        KeyCode::Right | KeyCode::Char('+') => self.adjust_guests(1),
                        _ => {}
                    },
                    InfoFocus::Previous | InfoFocus::ShowTables => {}
                }
                Intent::None
            }
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) -> Intent {
        let len = self.tables.len();
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Intent::Previous,
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
                self.selected_table = cycle(self.selected_table, len, true);
                Intent::None
            }
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => {
                self.selected_table = cycle(self.selected_table, len, false);
                Intent::None
            }
            KeyCode::Enter => match self.selected() {
                Some(table) if self.availability(table).is_bookable() => Intent::Book(table.id),
                _ => Intent::None,
            },
            _ => Intent::None,
        }
    }
}
