use crate::frame_layout::{
    CardArea, ColumnArea, FrameLayout, ModalArea, ADD_LABEL, CANCEL_LABEL, CLEAR_LABEL,
    CLOSE_LABEL, CREATE_LABEL, DELETE_LABEL,
};
use crate::terminal_view::{FormField, TerminalView};
use crate::theme::*;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use taskboard_board::{classes, BoardView, CardMarkup, MemoryView, Node};

pub fn render(frame: &mut Frame, areas: &FrameLayout, view: &TerminalView) {
    render_header(frame, areas);
    for column in &areas.columns {
        render_column(frame, column, view.doc());
    }
    render_footer(frame, areas);
    if let Some(modal) = &areas.modal {
        render_modal(frame, modal, view);
    }
}

fn render_header(frame: &mut Frame, areas: &FrameLayout) {
    let block = Block::default()
        .title(Span::styled(" Task Board ", bold_highlight()))
        .borders(Borders::ALL)
        .border_style(unfocused_border());
    frame.render_widget(block, areas.header);

    if let Some(area) = areas.add_button {
        frame.render_widget(Paragraph::new(ADD_LABEL).style(button()), area);
    }
    if let Some(area) = areas.clear_button {
        frame.render_widget(Paragraph::new(CLEAR_LABEL).style(danger_text()), area);
    }
}

fn render_column(frame: &mut Frame, column: &ColumnArea, doc: &MemoryView) {
    let Some(area) = column.area else {
        return;
    };
    let count = doc.cards(column.list).len();
    let mut block = Block::default()
        .title(format!(" {} ({}) ", column.status.label(), count))
        .borders(Borders::ALL)
        .border_style(unfocused_border());
    if doc.has_class(Node::Element(column.column), classes::DROP_HIGHLIGHT) {
        block = block.style(drop_highlight()).border_style(focused_border());
    }
    frame.render_widget(block, area);

    for card in &column.cards {
        if let Some(markup) = doc.card(card.id) {
            render_card(frame, card, markup);
        }
    }
}

fn render_card(frame: &mut Frame, card: &CardArea, markup: &CardMarkup) {
    let dimmed = markup.has_class(classes::DIMMED);
    let (border, text) = if dimmed {
        (dimmed_text(), dimmed_text())
    } else {
        (accent_style(markup.accent), normal_text())
    };

    let lines = vec![
        Line::from(Span::styled(
            markup.title.clone(),
            text.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(markup.description.clone(), text)),
        Line::from(Span::styled(markup.created_label.clone(), label_text())),
    ];
    let block = Block::default().borders(Borders::ALL).border_style(border);

    frame.render_widget(Clear, card.area);
    frame.render_widget(Paragraph::new(lines).block(block), card.area);
    if let Some(delete) = card.delete {
        frame.render_widget(Paragraph::new(DELETE_LABEL).style(danger_text()), delete);
    }
}

fn render_footer(frame: &mut Frame, areas: &FrameLayout) {
    let help_text = if areas.modal.is_some() {
        "Tab: next field | Enter: create | Esc: cancel"
    } else {
        "n: new task | drag cards between columns with the mouse | q: quit"
    };
    let help = Paragraph::new(help_text)
        .style(label_text())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, areas.footer);
}

fn render_modal(frame: &mut Frame, modal: &ModalArea, view: &TerminalView) {
    frame.render_widget(Clear, modal.area);
    let block = Block::default()
        .title(" New Task ")
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());
    frame.render_widget(block, modal.area);
    frame.render_widget(Paragraph::new(CLOSE_LABEL).style(danger_text()), modal.close);

    frame.render_widget(Paragraph::new("Title").style(highlight_text()), modal.title_label);
    frame.render_widget(
        Paragraph::new("Description").style(highlight_text()),
        modal.description_label,
    );
    for field in [FormField::Title, FormField::Description] {
        render_field(frame, modal.field(field), view, field);
    }

    frame.render_widget(Paragraph::new(CREATE_LABEL).style(button()), modal.submit);
    frame.render_widget(Paragraph::new(CANCEL_LABEL).style(label_text()), modal.cancel);
}

fn render_field(frame: &mut Frame, area: Rect, view: &TerminalView, field: FormField) {
    let input = view.input(field);
    let focused = view.focus() == field;
    let border = if focused {
        focused_border()
    } else {
        unfocused_border()
    };
    let widget = Paragraph::new(input.as_str())
        .style(normal_text())
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(widget, area);

    if focused && area.height > 2 {
        let cursor_x = area.x + 1 + input.cursor_column() as u16;
        let cursor_y = area.y + 1;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), cursor_y));
    }
}
