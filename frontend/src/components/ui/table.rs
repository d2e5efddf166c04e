use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Clone, PartialEq)]
pub struct TableRow {
    /// Stable key for Yew's keyed list diffing.
    pub key: String,
    /// One cell per column, in column order.
    pub cells: Vec<Html>,
}

#[derive(Properties, PartialEq)]
pub struct TableProps {
    pub columns: Vec<AttrValue>,
    pub rows: Vec<TableRow>,
}

pub struct Table;

impl Component for Table {
    type Message = ();
    type Properties = TableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Table
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            { for props.columns.iter().map(|label| html! { <th>{ label.clone() }</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for props.rows.iter().map(|row| html! {
                            <tr key={row.key.clone()}>
                                { for row.cells.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    }
}
