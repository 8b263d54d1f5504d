use crate::demo::Article;
use crate::source::LoadSource;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::Frame;

const SCREEN_TITLE: &str = "Article";

pub fn draw<S>(frame: &mut Frame<'_>, app: &App<S>)
where
    S: LoadSource<Output = Article>,
{
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(SCREEN_TITLE).widget(app.state_tag()), header);
    frame.render_widget(app.view(), body);
    frame.render_widget(Footer::new().widget(footer), footer);
}
