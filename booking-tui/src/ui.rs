//! ratatui rendering
//!
//! Pure functions of [`App`] state; nothing here mutates or talks to the
//! backend.

use ratatui::{prelude::*, widgets::*};
use shared::models::{MealTime, TableAvailability};
use shared::validation::FieldError;

use crate::app::{App, Screen};
use crate::views::home::{HomeButton, TAGLINE, WELCOME};
use crate::views::login::LoginFocus;
use crate::views::my_reservations::{EMPTY_TEXT, SORT_HINT};
use crate::views::reservation::{DATE_FORMAT, DateFocus, InfoFocus};
use crate::views::signup::SignupFocus;
use crate::views::{
    HomeMenu, LoginForm, MyReservations, NoticeLevel, ReservationPage, SignupForm, Step, TextField,
};

const PRIMARY: Color = Color::Rgb(255, 152, 0);
const DANGER: Color = Color::Rgb(255, 77, 79);
const MUTED: Color = Color::DarkGray;

const LOADING_TEXT: &str = "Loading...";

const FORM_WIDTH: u16 = 44;
const CARD_WIDTH: u16 = 20;
const CARD_HEIGHT: u16 = 6;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Current view
            Constraint::Length(1), // Key hints
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    match &app.screen {
        Screen::Home(menu) => draw_home(f, menu, chunks[1]),
        Screen::Signup(form) => draw_signup(f, form, chunks[1]),
        Screen::Login(form) => draw_login(f, form, chunks[1]),
        Screen::Reservation(page) => draw_reservation(f, page, chunks[1]),
        Screen::MyReservations(list) => draw_my_reservations(f, list, chunks[1]),
    }

    let hints = Paragraph::new(key_hints(&app.screen))
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center);
    f.render_widget(hints, chunks[2]);

    if let Some(confirm) = &app.confirm {
        draw_modal(f, " Confirm ", &confirm.prompt, "[y] Yes   [n] No", PRIMARY);
    }
    if app.loading && app.notice.is_none() {
        let area = centered(24, 3, f.area());
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(LOADING_TEXT)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(PRIMARY)),
                ),
            area,
        );
    }
    if let Some(notice) = &app.notice {
        let color = match notice.level {
            NoticeLevel::Info => Color::Green,
            NoticeLevel::Error => DANGER,
        };
        draw_modal(f, " Notice ", &notice.text, "[Enter] OK", color);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(PRIMARY));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Paragraph::new(Line::from(vec![Span::styled(
        " 🍽  Dongguk Restaurant ",
        Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center);
    f.render_widget(title, inner);

    if app.logged_in {
        let nav = Paragraph::new(Line::from(vec![
            Span::styled("[F1] ", Style::default().fg(MUTED)),
            Span::raw("Reserve  "),
            Span::styled("[F2] ", Style::default().fg(MUTED)),
            Span::raw("My reservations  "),
            Span::styled("[F3] ", Style::default().fg(MUTED)),
            Span::styled("Logout ", Style::default().fg(DANGER)),
        ]))
        .alignment(Alignment::Right);
        f.render_widget(nav, inner);
    }
}

fn key_hints(screen: &Screen) -> &'static str {
    match screen {
        Screen::Home(_) => "←/→ select · Enter open · s signup · l login · q quit",
        Screen::Signup(_) | Screen::Login(_) => "Tab next field · Enter submit · Esc back",
        Screen::Reservation(page) => match page.step {
            Step::DateTime => "Tab move · ↑/↓ change day · ←/→ lunch/dinner · Enter next",
            Step::GuestInfo => "Tab move · ←/→ guests · Enter show tables · Esc previous",
            Step::Tables => "←/→ choose table · Enter book · Esc previous",
        },
        Screen::MyReservations(_) => "↑/↓ select · Enter cancel reservation · r reload",
    }
}

// ========== Building blocks ==========

fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_modal(f: &mut Frame, title: &str, text: &str, hint: &str, color: Color) {
    let area = centered(50, 7, f.area());
    f.render_widget(Clear, area);
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(text.to_string()),
        Line::from(""),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(MUTED))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(body, area);
}

fn draw_field(
    f: &mut Frame,
    area: Rect,
    field: &TextField,
    focused: bool,
    error: Option<&FieldError>,
) {
    let border = if focused { PRIMARY } else { Color::Gray };
    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if let Some(err) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", err),
            Style::default().fg(DANGER),
        )));
    }

    let width = area.width.max(3) - 3;
    let scroll = field.input.visual_scroll(width as usize);
    let input = Paragraph::new(field.display())
        .scroll((0, scroll as u16))
        .block(block);
    f.render_widget(input, area);

    if focused {
        f.set_cursor_position((
            area.x + ((field.input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        ));
    }
}

fn button<'a>(label: &'a str, focused: bool, enabled: bool, primary: bool) -> Paragraph<'a> {
    let style = if !enabled {
        Style::default().fg(MUTED)
    } else if focused {
        Style::default()
            .fg(Color::Black)
            .bg(if primary { PRIMARY } else { Color::Gray })
            .add_modifier(Modifier::BOLD)
    } else if primary {
        Style::default().fg(PRIMARY)
    } else {
        Style::default()
    };
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style))
}

fn button_row(area: Rect, count: usize) -> Vec<Rect> {
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .spacing(2)
        .split(area)
        .to_vec()
}

// ========== Screens ==========

fn draw_home(f: &mut Frame, menu: &HomeMenu, area: Rect) {
    let area = centered(70, 10, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let welcome = Paragraph::new(WELCOME)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(welcome, rows[0]);
    f.render_widget(
        Paragraph::new(TAGLINE)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    let buttons = button_row(centered(36, 3, rows[3]), 2);
    f.render_widget(
        button("Sign up", menu.focus == HomeButton::Signup, true, true),
        buttons[0],
    );
    f.render_widget(
        button("Log in", menu.focus == HomeButton::Login, true, false),
        buttons[1],
    );
}

fn form_frame(f: &mut Frame, title: &str, area: Rect, rows: u16) -> Rect {
    let outer = centered(FORM_WIDTH, rows + 2, area);
    let block = Block::default()
        .title(Line::from(format!(" {} ", title)).centered())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(outer);
    f.render_widget(block, outer);
    inner
}

fn draw_signup(f: &mut Frame, form: &SignupForm, area: Rect) {
    let inner = form_frame(f, "Sign up", area, 13);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

    draw_field(f, rows[0], &form.username, form.focus == SignupFocus::Username, None);
    draw_field(f, rows[1], &form.password, form.focus == SignupFocus::Password, None);
    draw_field(
        f,
        rows[2],
        &form.name,
        form.focus == SignupFocus::Name,
        form.name_error.as_ref(),
    );

    let buttons = button_row(rows[4], 2);
    f.render_widget(button("Back", form.focus == SignupFocus::Back, true, false), buttons[0]);
    f.render_widget(button("Sign up", form.focus == SignupFocus::Submit, true, true), buttons[1]);
}

fn draw_login(f: &mut Frame, form: &LoginForm, area: Rect) {
    let inner = form_frame(f, "Log in", area, 10);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

    draw_field(f, rows[0], &form.username, form.focus == LoginFocus::Username, None);
    draw_field(f, rows[1], &form.password, form.focus == LoginFocus::Password, None);

    let buttons = button_row(rows[3], 2);
    f.render_widget(button("Back", form.focus == LoginFocus::Back, true, false), buttons[0]);
    f.render_widget(button("Log in", form.focus == LoginFocus::Submit, true, true), buttons[1]);
}

fn draw_reservation(f: &mut Frame, page: &ReservationPage, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    // Progress dots
    let dots: Vec<Span> = [Step::DateTime, Step::GuestInfo, Step::Tables]
        .iter()
        .map(|s| {
            let color = if page.step >= *s { PRIMARY } else { MUTED };
            Span::styled(" ● ", Style::default().fg(color))
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        chunks[0],
    );

    match page.step {
        Step::DateTime => draw_date_step(f, page, chunks[1]),
        Step::GuestInfo => draw_info_step(f, page, chunks[1]),
        Step::Tables => draw_table_step(f, page, chunks[1]),
    }
}

fn draw_date_step(f: &mut Frame, page: &ReservationPage, area: Rect) {
    let inner = form_frame(f, "1. Date · Time", area, 10);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

    draw_field(
        f,
        rows[0],
        &page.date_input,
        page.date_focus == DateFocus::Date,
        None,
    );

    let times = button_row(rows[1], 2);
    for (slot, time) in MealTime::ALL.iter().enumerate() {
        let chosen = page.time == *time;
        let mut style = if chosen {
            Style::default().fg(Color::Black).bg(PRIMARY)
        } else {
            Style::default()
        };
        if page.date_focus == DateFocus::Time {
            style = style.add_modifier(Modifier::BOLD);
        }
        let border = if page.date_focus == DateFocus::Time { PRIMARY } else { Color::Gray };
        let widget = Paragraph::new(time.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(widget, times[slot]);
    }

    f.render_widget(
        button("Next step", page.date_focus == DateFocus::Next, true, true),
        centered(20, 3, rows[3]),
    );
}

fn draw_info_step(f: &mut Frame, page: &ReservationPage, area: Rect) {
    let inner = form_frame(f, "2. Guest details", area, 16);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(inner);

    draw_field(
        f,
        rows[0],
        &page.name,
        page.info_focus == InfoFocus::Name,
        page.name_error.as_ref(),
    );
    draw_field(
        f,
        rows[1],
        &page.phone,
        page.info_focus == InfoFocus::Phone,
        page.phone_error.as_ref(),
    );
    draw_field(
        f,
        rows[2],
        &page.credit_card,
        page.info_focus == InfoFocus::CreditCard,
        page.card_error.as_ref(),
    );

    let stepper_style = if page.info_focus == InfoFocus::Guests {
        Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let stepper = Paragraph::new(Line::from(vec![
        Span::styled(" − ", Style::default().fg(MUTED)),
        Span::styled(format!("  {} guests  ", page.guests.get()), stepper_style),
        Span::styled(" + ", Style::default().fg(MUTED)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(stepper_style));
    f.render_widget(stepper, rows[3]);

    let buttons = button_row(rows[4], 2);
    f.render_widget(
        button("Previous", page.info_focus == InfoFocus::Previous, true, false),
        buttons[0],
    );
    f.render_widget(
        button(
            "Show tables",
            page.info_focus == InfoFocus::ShowTables,
            page.all_ok(),
            true,
        ),
        buttons[1],
    );
}

fn draw_table_step(f: &mut Frame, page: &ReservationPage, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(if page.banner.is_some() { 2 } else { 0 }),
            Constraint::Min(1),
        ])
        .split(area);

    let date = page
        .date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();
    f.render_widget(
        Paragraph::new(format!(
            "3. Choose a table · {} {} · {} guests",
            date,
            page.time.label(),
            page.guests.get()
        ))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[0],
    );

    if let Some(banner) = &page.banner {
        f.render_widget(
            Paragraph::new(banner.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(DANGER)),
            chunks[1],
        );
    }

    let grid = chunks[2];
    let per_row = (grid.width / (CARD_WIDTH + 1)).max(1) as usize;
    let used_width = per_row as u16 * (CARD_WIDTH + 1);
    let left = grid.x + grid.width.saturating_sub(used_width) / 2;

    for (i, table) in page.tables.iter().enumerate() {
        let row = (i / per_row) as u16;
        let col = (i % per_row) as u16;
        let y = grid.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > grid.y + grid.height {
            break;
        }
        let card = Rect {
            x: left + col * (CARD_WIDTH + 1),
            y,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
        };

        let availability = page.availability(table);
        let label_style = match availability {
            TableAvailability::Available => Style::default().fg(Color::Black).bg(PRIMARY),
            TableAvailability::TooSmall => Style::default().fg(Color::White).bg(Color::Rgb(255, 138, 128)),
            TableAvailability::Reserved => Style::default().fg(MUTED),
        };
        let selected = i == page.selected_table;
        let border = if selected {
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
        } else if availability.is_bookable() {
            Style::default()
        } else {
            Style::default().fg(MUTED)
        };

        let body = Paragraph::new(vec![
            Line::from(table.location.clone()),
            Line::from(format!("{} seats", table.capacity)),
            Line::from(Span::styled(format!(" {} ", availability.label()), label_style)),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" #{} ", table.id))
                .borders(Borders::ALL)
                .border_type(if selected { BorderType::Thick } else { BorderType::Rounded })
                .border_style(border),
        );
        f.render_widget(body, card);
    }
}

fn draw_my_reservations(f: &mut Frame, list: &MyReservations, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new("My reservations")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(format!("※ {}", SORT_HINT))
            .alignment(Alignment::Center)
            .style(Style::default().fg(MUTED)),
        chunks[1],
    );

    if list.reservations.is_empty() {
        let text = if list.loaded { EMPTY_TEXT } else { "Loading..." };
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), chunks[2]);
        return;
    }

    let items: Vec<ListItem> = list
        .reservations
        .iter()
        .map(|r| {
            let meal_style = match r.time {
                MealTime::Lunch => Style::default().fg(PRIMARY),
                MealTime::Dinner => Style::default().fg(Color::Magenta),
            };
            let mut badges = vec![
                Span::styled(r.date.format(DATE_FORMAT).to_string(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("   "),
                Span::styled(format!("[Table #{}]", r.table_id), Style::default().fg(Color::Gray)),
                Span::raw(" "),
                Span::styled(format!("[{}]", r.time.label()), meal_style),
                Span::raw(" "),
                Span::styled(format!("[{} guests]", r.guests), Style::default().fg(Color::Green)),
            ];
            if let Some(location) = &r.location {
                badges.push(Span::raw(" "));
                badges.push(Span::styled(format!("[{}]", location), Style::default().fg(MUTED)));
            }
            ListItem::new(Line::from(badges))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(list.selected));
    let widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} reservation(s) ", list.reservations.len())),
        )
        .highlight_style(Style::default().bg(Color::Rgb(60, 60, 60)))
        .highlight_symbol("▶ ");
    let area = centered(72, chunks[2].height, chunks[2]);
    f.render_stateful_widget(widget, area, &mut state);
}
