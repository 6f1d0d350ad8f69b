use crate::{
    dialog::{handle_dialog_input, DialogAction},
    events::{should_quit, Event, EventHandler},
    frame_layout::{FrameLayout, Hit},
    terminal_view::{FormField, TerminalView},
    ui,
};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use std::io;
use taskboard_board::{
    BoardCoordinator, BoardKey, BoardLayout, ClickTarget, DataTransfer, ElementId, Point,
};
use taskboard_core::AutoScrollSettings;
use taskboard_domain::{TaskId, TaskService, TaskStore};

/// Terminal host: feeds key, mouse and tick events to the board coordinator.
pub struct App<S: TaskStore> {
    board: BoardCoordinator<S, TerminalView>,
    frame: FrameLayout,
    transfer: DataTransfer,
    /// Card under the last left-button press, until it moves or is released.
    pressed: Option<TaskId>,
    hover: Option<ElementId>,
    should_quit: bool,
}

impl<S: TaskStore> App<S> {
    pub fn new(service: TaskService<S>, settings: AutoScrollSettings) -> Self {
        let layout = BoardLayout::default();
        let view = TerminalView::new(&layout);
        Self {
            board: BoardCoordinator::new(service, view, layout, settings),
            frame: FrameLayout::default(),
            transfer: DataTransfer::new(),
            pressed: None,
            hover: None,
            should_quit: false,
        }
    }

    pub fn board(&self) -> &BoardCoordinator<S, TerminalView> {
        &self.board
    }

    pub fn frame_layout(&self) -> &FrameLayout {
        &self.frame
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Lays out a frame of `area` and publishes its geometry to the board.
    pub fn update_layout(&mut self, area: Rect) {
        let layout = self.board.layout().clone();
        let first = FrameLayout::compute(area, &self.board.view(), &layout);
        // Extents may clamp scroll offsets, so lay out again afterwards
        first.sync(&mut self.board.view_mut(), &layout);
        self.frame = FrameLayout::compute(area, &self.board.view(), &layout);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(width, height) => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
            }
            Event::Tick => self.board.on_tick(),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.board.is_modal_open() {
            let field = self.board.view().focus();
            let action = handle_dialog_input(self.board.view_mut().input_mut(field), key.code);
            match action {
                DialogAction::Cancel => self.board.on_key_down(BoardKey::Escape),
                DialogAction::Confirm => {
                    self.board.on_submit();
                }
                DialogAction::NextField => self.board.view_mut().cycle_focus(),
                DialogAction::None => {}
            }
            return;
        }

        if should_quit(&key) {
            self.quit();
            return;
        }
        match key.code {
            KeyCode::Char('n') => self.open_form(),
            KeyCode::Esc => self.board.on_key_down(BoardKey::Escape),
            _ => self.board.on_key_down(BoardKey::Other),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.press(x, y),
            MouseEventKind::Drag(MouseButton::Left) => self.drag_to(x, y),
            MouseEventKind::Up(MouseButton::Left) => self.release(x, y),
            _ => {}
        }
    }

    fn open_form(&mut self) {
        self.board.view_mut().set_focus(FormField::Title);
        self.board.on_click(ClickTarget::AddTask);
    }

    fn press(&mut self, x: u16, y: u16) {
        self.pressed = None;
        if self.board.is_dragging() {
            // Release was lost, e.g. outside the terminal
            tracing::debug!("Press during a live drag, ending it");
            self.end_drag();
        }
        match self.frame.hit(x, y) {
            Hit::Click(ClickTarget::AddTask) => self.open_form(),
            Hit::Click(target) => self.board.on_click(target),
            Hit::Submit => {
                self.board.on_submit();
            }
            Hit::Field(field) => self.board.view_mut().set_focus(field),
            Hit::Card(id) => self.pressed = Some(id),
            Hit::Column(_) | Hit::Nothing => {}
        }
    }

    /// The first motion after pressing a card starts the drag.
    fn drag_to(&mut self, x: u16, y: u16) {
        if !self.board.is_dragging() {
            let Some(id) = self.pressed.take() else {
                return;
            };
            self.transfer.clear_data();
            self.board.on_drag_start(id, &mut self.transfer);
        }

        self.board
            .on_drag(Some(Point::new(f64::from(x), f64::from(y))));

        let over = self.frame.column_at(x, y);
        if over != self.hover {
            if let Some(left) = self.hover {
                self.board.on_drag_leave(left);
            }
            if let Some(entered) = over {
                self.board.on_drag_over(entered);
            }
            self.hover = over;
        }
    }

    fn release(&mut self, x: u16, y: u16) {
        self.pressed = None;
        if !self.board.is_dragging() {
            return;
        }
        if let Some(column) = self.frame.column_at(x, y) {
            self.board.on_drop(column, &self.transfer);
        }
        self.end_drag();
    }

    fn end_drag(&mut self) {
        self.board.on_drag_end();
        self.hover = None;
        self.transfer.clear_data();
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.update_layout(frame.area());
        let view = self.board.view();
        ui::render(frame, &self.frame, &view);
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new(self.board.tick_interval());

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        self.board.shutdown();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            match events.next().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
