//! Multi-step application form

mod field_renderer;

use crate::app::App;
use crate::i18n::{Locale, TextKey};
use crate::state::{
    digits_only, Country, ErrorKey, Field, FormEngine, Gender, Step, MIN_PURPOSE_CHARS,
};
use field_renderer::{draw_field, field_height, FieldView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Draw the current form step
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.controller.form();
    let step = form.step();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Step content
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    draw_progress(frame, chunks[0], app.locale, step);

    if step.is_last() {
        draw_review(frame, chunks[1], app.locale, form);
    } else {
        draw_fields(frame, chunks[1], app, form, step);
    }

    let next = if step.is_last() {
        TextKey::Submit
    } else {
        TextKey::Next
    };
    let mut hints = vec![
        Span::styled(" Esc", Style::default().fg(Color::Cyan)),
        Span::raw(format!(":{}  ", app.t(TextKey::Back))),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(format!(":{}  ", app.t(next))),
    ];
    if step.is_last() {
        hints.push(Span::styled("Space", Style::default().fg(Color::Cyan)));
        hints.push(Span::raw(format!(":{}", app.t(TextKey::ConfirmAccuracy))));
    } else {
        hints.push(Span::styled("Tab", Style::default().fg(Color::Cyan)));
        hints.push(Span::raw(":↓  ←/→:▾"));
    }
    frame.render_widget(
        Paragraph::new(Line::from(hints)).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn draw_progress(frame: &mut Frame, area: Rect, locale: Locale, step: Step) {
    let label = format!(
        "{} {}/{} · {}",
        locale.translate(TextKey::Step),
        step.number(),
        Step::COUNT,
        locale.translate(step.into()),
    );
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Yellow).bg(Color::Black))
        .percent(step.percent())
        .label(label);
    frame.render_widget(gauge, area);
}

/// Value as shown to the applicant, choices translated
fn display_value(locale: Locale, form: &FormEngine, field: Field) -> String {
    let record = form.record();
    match field {
        Field::Gender => record
            .gender
            .map(|g: Gender| locale.translate(g.into()).to_string())
            .unwrap_or_default(),
        Field::Country => record
            .country
            .map(|c: Country| locale.translate(c.into()).to_string())
            .unwrap_or_default(),
        _ => record.value(field).to_string(),
    }
}

fn field_hint(locale: Locale, form: &FormEngine, field: Field) -> Option<String> {
    match field {
        Field::Amount => Some(locale.translate(TextKey::AmountHint).to_string()),
        Field::Purpose => Some(format!(
            "{}/{} {}",
            form.record().purpose.trim().chars().count(),
            MIN_PURPOSE_CHARS,
            locale.translate(TextKey::PurposeHint),
        )),
        _ => None,
    }
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App, form: &FormEngine, step: Step) {
    let fields = step.fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(f.is_multiline())))
        .collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, field) in fields.iter().enumerate() {
        let value = display_value(app.locale, form, *field);
        let error = form.error(*field).map(|code| app.t(code.into()));
        let view = FieldView {
            label: app.t((*field).into()),
            value: &value,
            error,
            hint: field_hint(app.locale, form, *field),
            is_active: idx == app.active_field,
            is_multiline: field.is_multiline(),
            is_choice: field.is_choice(),
        };
        draw_field(frame, rows[idx], &view);
    }
}

fn draw_review(frame: &mut Frame, area: Rect, locale: Locale, form: &FormEngine) {
    let record = form.record();
    let label_style = Style::default().fg(Color::DarkGray);

    let summary = [
        (Field::FullName, record.full_name.clone()),
        (Field::Phone, digits_only(&record.phone)),
        (Field::Email, record.email.clone()),
        (Field::Country, display_value(locale, form, Field::Country)),
        (Field::Amount, format!("${}", record.amount)),
        (Field::Purpose, record.purpose.clone()),
    ];

    let mut lines: Vec<Line> = summary
        .into_iter()
        .map(|(field, value)| {
            Line::from(vec![
                Span::styled(format!("{}: ", locale.translate(field.into())), label_style),
                Span::raw(value),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    let checkbox = if form.consent() { "[x] " } else { "[ ] " };
    lines.push(Line::from(vec![
        Span::styled(
            checkbox,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(locale.translate(TextKey::ConsentText)),
    ]));
    if let Some(code) = form.error(ErrorKey::Consent) {
        lines.push(Line::from(Span::styled(
            locale.translate(code.into()),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", locale.translate(TextKey::ConfirmAccuracy)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
